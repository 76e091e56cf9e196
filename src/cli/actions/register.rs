use crate::{
    api::{ApiClient, ApiResult},
    cli::{
        actions::feedback::{emit, Tone},
        globals::GlobalArgs,
    },
    forms::RegistrationForm,
};
use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub form: RegistrationForm,
}

/// Validate the registration form and submit it.
/// # Errors
/// Returns an error if the API client cannot be built or output fails.
pub async fn execute(args: Args) -> Result<bool> {
    let request = match args.form.validate() {
        Ok(request) => request,
        Err(errors) => {
            debug!("registration form rejected");
            let result = ApiResult::failed(errors.to_string());
            emit(args.globals.output, Tone::Error, &result.message, &result)?;
            return Ok(false);
        }
    };

    let client = ApiClient::new(args.globals.api).context("failed to build API client")?;
    let result = client.register(&request).await;

    if result.success {
        info!("registration accepted");
    }

    emit(
        args.globals.output,
        Tone::from_success(result.success),
        &result.message,
        &result,
    )?;

    Ok(result.success)
}
