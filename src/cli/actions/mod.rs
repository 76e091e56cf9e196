pub mod check_email;
pub mod feedback;
pub mod login;
pub mod register;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
    Login(login::Args),
    CheckEmail(check_email::Args),
}

impl Action {
    /// Execute the action and report whether the backend accepted it.
    /// # Errors
    /// Returns an error if the client cannot be built or output cannot be written.
    pub async fn execute(self) -> anyhow::Result<bool> {
        run::execute(self).await
    }
}
