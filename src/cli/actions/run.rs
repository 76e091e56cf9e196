use crate::cli::actions::{check_email, login, register, Action};
use anyhow::Result;

/// Execute the provided action.
///
/// Resolves to `true` when the backend accepted the request.
///
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<bool> {
    match action {
        Action::Register(args) => register::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::CheckEmail(args) => check_email::execute(args).await,
    }
}
