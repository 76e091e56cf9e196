use std::{error::Error as StdError, time::Duration};
use thiserror::Error;

/// Fallback description when a transport error has nothing to say.
pub const GENERIC_NETWORK_ERROR: &str = "Network error";

/// Transport-level failure of a single exchange.
///
/// Never returned to callers of [`super::ApiClient`]; operations fold it into
/// their result value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("Request aborted: timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl ApiError {
    /// Builds a network failure from any error, keeping its source chain.
    pub fn network(err: &(dyn StdError + 'static)) -> Self {
        Self::Network(describe(err))
    }

    /// User-facing description, never empty.
    #[must_use]
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_NETWORK_ERROR.to_string()
        } else {
            message
        }
    }
}

// The request URL may carry an email in its query string.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(&err.without_url())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::Network(format!("Invalid request URL: {err}"))
    }
}

/// Joins an error and its sources with `": "`, skipping repeated text.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);

    while let Some(e) = current {
        let text = e.to_string();
        if !text.is_empty() && !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        current = e.source();
    }

    parts.join(": ")
}
