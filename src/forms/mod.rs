//! Form input validation for registration and sign-in.
//!
//! Forms hold raw user input. `validate` trims what needs trimming, checks the
//! rules, and only then produces the request payload for [`crate::api`], so a
//! rejected form never triggers a network call.

pub mod registration;
pub mod sign_in;

pub use registration::RegistrationForm;
pub use sign_in::SignInForm;

use regex::Regex;
use std::fmt;

/// Longest accepted email address.
pub const MAX_EMAIL_CHARS: usize = 320;
/// Shortest accepted registration password.
pub const MIN_PASSWORD_CHARS: usize = 6;

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Name,
    Password,
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Name => f.write_str("name"),
            Self::Password => f.write_str("password"),
            Self::ConfirmPassword => f.write_str("confirm password"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub hint: String,
}

/// Every rule a form broke, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, field: Field, hint: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            hint: hint.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was recorded.
    /// # Errors
    /// Returns `self` if any field failed validation.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hints: Vec<&str> = self.errors.iter().map(|e| e.hint.as_str()).collect();
        f.write_str(&hints.join("\n"))
    }
}

impl std::error::Error for FormErrors {}

/// Shared email rules: required, bounded, well formed.
fn check_email(email: &str, errors: &mut FormErrors) {
    if email.is_empty() {
        errors.push(Field::Email, "Email is required.");
    } else if email.chars().count() > MAX_EMAIL_CHARS {
        errors.push(
            Field::Email,
            format!("Email must be at most {MAX_EMAIL_CHARS} characters."),
        );
    } else if !valid_email(email) {
        errors.push(Field::Email, "Please enter a valid email address.");
    }
}
