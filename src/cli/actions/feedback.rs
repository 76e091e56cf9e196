//! Terminal rendering of call outcomes.
//!
//! Text output shows the message styled by outcome (green on success, red on
//! failure) when the stream is a terminal; JSON output prints the result value
//! itself so scripts see the same `{success, message}` shape as the client.

use crate::cli::globals::OutputFormat;
use anyhow::Result;
use clap::builder::styling::{AnsiColor, Effects, Style};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    #[must_use]
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Error
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => AnsiColor::Green.on_default() | Effects::BOLD,
            Self::Error => AnsiColor::Red.on_default() | Effects::BOLD,
        }
    }
}

/// Format one line of feedback, optionally with ANSI styling.
#[must_use]
pub fn format_text(tone: Tone, text: &str, styled: bool) -> String {
    if styled {
        let style = tone.style();
        format!("{style}{text}{style:#}")
    } else {
        text.to_string()
    }
}

/// Write the outcome: successes to stdout, failures to stderr.
///
/// # Errors
/// Returns an error if JSON encoding or writing to the stream fails.
pub fn emit<T: Serialize>(format: OutputFormat, tone: Tone, text: &str, value: &T) -> Result<()> {
    let line = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Text => {
            let styled = match tone {
                Tone::Success => io::stdout().is_terminal(),
                Tone::Error => io::stderr().is_terminal(),
            };
            format_text(tone, text, styled)
        }
    };

    match tone {
        Tone::Success => writeln!(io::stdout().lock(), "{line}")?,
        Tone::Error => writeln!(io::stderr().lock(), "{line}")?,
    }

    Ok(())
}
