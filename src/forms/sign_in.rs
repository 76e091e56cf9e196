use super::{Field, FormErrors, MAX_EMAIL_CHARS};
use crate::api::LoginRequest;
use secrecy::{ExposeSecret, SecretString};

/// Raw input of the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

impl SignInForm {
    /// The sign-in form only checks presence; the backend judges the
    /// credentials.
    ///
    /// # Errors
    /// Returns every failed rule when the form is not submittable.
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(Field::Email, "Email is required.");
        } else if email.chars().count() > MAX_EMAIL_CHARS {
            errors.push(
                Field::Email,
                format!("Email must be at most {MAX_EMAIL_CHARS} characters."),
            );
        }

        if self.password.expose_secret().is_empty() {
            errors.push(Field::Password, "Password is required.");
        }

        errors.into_result(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}
