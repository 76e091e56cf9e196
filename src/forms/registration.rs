use super::{check_email, Field, FormErrors, MIN_PASSWORD_CHARS};
use crate::api::RegisterRequest;
use secrecy::{ExposeSecret, SecretString};

/// Raw input of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub name: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub mobile_number: Option<String>,
    pub address: Option<String>,
}

impl RegistrationForm {
    /// Check the input and build the registration payload.
    ///
    /// Email, name, mobile number and address are trimmed; blank optional
    /// fields are dropped. Passwords are taken as typed.
    ///
    /// # Errors
    /// Returns every failed rule when the form is not submittable.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let email = self.email.trim();
        check_email(email, &mut errors);

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(Field::Name, "Name is required.");
        }

        let password = self.password.expose_secret();
        if password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(
                Field::Password,
                format!("Password must be at least {MIN_PASSWORD_CHARS} characters."),
            );
        }
        if password != self.confirm_password.expose_secret() {
            errors.push(Field::ConfirmPassword, "Passwords do not match.");
        }

        errors.into_result(RegisterRequest {
            email: email.to_string(),
            password: self.password.clone(),
            name: name.to_string(),
            mobile_number: optional(self.mobile_number.as_deref()),
            address: optional(self.address.as_deref()),
        })
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
