//! # auth-portal (Registration & Sign-in Client)
//!
//! `auth-portal` talks to the authentication API on behalf of a user: it
//! registers accounts, signs users in and checks whether an email address is
//! already taken.
//!
//! ## API client
//!
//! Every call is bounded by a deadline and always resolves to a uniform result
//! (`success` plus a human-readable `message`). Server-reported failures and
//! transport failures are absorbed by the client; callers never see an error
//! value, only a result to render.
//!
//! ## Forms
//!
//! Field validation (email shape, password length and confirmation) happens
//! before any request is built, so invalid input never reaches the network.
//!
//! ## Base address
//!
//! The backend base address is resolved from `AUTH_PORTAL_API_BASE_URL`, then
//! an explicit override (`--api-base-url`), then `http://localhost:8080`.

pub mod api;
pub mod cli;
pub mod forms;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
