//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action to run, carrying the API client
//! configuration and the raw form input. Form validation is left to the action
//! so rejected input is reported the same way as a failed request.

use crate::api::ApiConfig;
use crate::cli::actions::{check_email, login, register, Action};
use crate::cli::commands::{api, auth};
use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if a required subcommand or argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_opts = api::Options::parse(matches);

    let config = ApiConfig::load()
        .with_override(api_opts.base_url)
        .with_timeout(api_opts.timeout);

    let mut globals = GlobalArgs::new(config);
    globals.set_output(api_opts.output);

    match matches.subcommand() {
        Some((auth::CMD_REGISTER, sub_m)) => Ok(Action::Register(register::Args {
            globals,
            form: auth::registration_form(sub_m),
        })),
        Some((auth::CMD_LOGIN, sub_m)) => Ok(Action::Login(login::Args {
            globals,
            form: auth::sign_in_form(sub_m),
        })),
        Some((auth::CMD_CHECK_EMAIL, sub_m)) => Ok(Action::CheckEmail(check_email::Args {
            globals,
            email: auth::email(sub_m),
        })),
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
