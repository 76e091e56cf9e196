//! Client for the authentication API with consistent timeouts and tolerant
//! response parsing.
//!
//! Three intents are supported: register, sign in and check whether an email
//! is already registered. Each call resolves the base address, performs one
//! HTTP exchange under a deadline and reduces whatever comes back to an
//! [`ApiResult`] or [`EmailCheck`]. No retries happen here; retry policy, if
//! any, belongs to the caller.

mod client;
pub mod config;
mod error;
pub mod response;
pub mod types;

pub use client::{ApiClient, CHECK_EMAIL_PATH, LOGIN_PATH, REGISTER_PATH};
pub use config::{resolve_base_address, ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{ApiError, GENERIC_NETWORK_ERROR};
pub use response::{ApiResult, EmailCheck};
pub use types::{LoginRequest, RegisterRequest};

#[cfg(test)]
mod tests;
