use crate::{
    api::{ApiClient, EmailCheck, GENERIC_NETWORK_ERROR},
    cli::{
        actions::feedback::{emit, Tone},
        globals::GlobalArgs,
    },
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
}

/// Human-readable line for an email check.
#[must_use]
pub fn describe(email: &str, check: &EmailCheck) -> String {
    match (check.success, check.exists) {
        (true, true) => format!("{email} is already registered"),
        (true, false) => format!("{email} is available"),
        (false, _) => check
            .message
            .clone()
            .unwrap_or_else(|| GENERIC_NETWORK_ERROR.to_string()),
    }
}

/// Ask the backend whether the email is taken.
/// # Errors
/// Returns an error if the API client cannot be built or output fails.
pub async fn execute(args: Args) -> Result<bool> {
    let email = args.email.trim();

    let client = ApiClient::new(args.globals.api).context("failed to build API client")?;
    let check = client.check_email_exists(email).await;

    emit(
        args.globals.output,
        Tone::from_success(check.success),
        &describe(email, &check),
        &check,
    )?;

    Ok(check.success)
}
