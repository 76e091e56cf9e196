use crate::{
    api::{config::ENV_API_BASE_URL, DEFAULT_TIMEOUT_MS},
    cli::globals::OutputFormat,
};
use clap::{builder::EnumValueParser, Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_OUTPUT: &str = "output";

#[derive(Debug)]
pub struct Options {
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub output: OutputFormat,
}

impl Options {
    /// Parse API client arguments from matches.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let base_url = matches
            .get_one::<String>(ARG_API_BASE_URL)
            .cloned()
            .filter(|v| !v.trim().is_empty());

        let timeout_ms = matches
            .get_one::<u64>(ARG_TIMEOUT_MS)
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let output = matches
            .get_one::<OutputFormat>(ARG_OUTPUT)
            .copied()
            .unwrap_or_default();

        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            output,
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help(format!(
                    "Backend base URL, used when {ENV_API_BASE_URL} is unset or blank"
                ))
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long(ARG_TIMEOUT_MS)
                .help("Request timeout in milliseconds")
                .env("AUTH_PORTAL_TIMEOUT_MS")
                .default_value("10000")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long(ARG_OUTPUT)
                .help("Output format")
                .env("AUTH_PORTAL_OUTPUT")
                .default_value("text")
                .global(true)
                .value_parser(EnumValueParser::<OutputFormat>::new()),
        )
}
