use crate::{
    api::{ApiClient, ApiResult},
    cli::{
        actions::feedback::{emit, Tone},
        globals::GlobalArgs,
    },
    forms::SignInForm,
};
use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub form: SignInForm,
}

/// Validate the sign-in form and submit it.
/// # Errors
/// Returns an error if the API client cannot be built or output fails.
pub async fn execute(args: Args) -> Result<bool> {
    let request = match args.form.validate() {
        Ok(request) => request,
        Err(errors) => {
            let result = ApiResult::failed(errors.to_string());
            emit(args.globals.output, Tone::Error, &result.message, &result)?;
            return Ok(false);
        }
    };

    let client = ApiClient::new(args.globals.api).context("failed to build API client")?;
    let result = client.sign_in(&request).await;

    if result.success {
        info!("signed in");
    }

    emit(
        args.globals.output,
        Tone::from_success(result.success),
        &result.message,
        &result,
    )?;

    Ok(result.success)
}
