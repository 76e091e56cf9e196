//! Response normalization.
//!
//! The backend is inconsistent about response shapes: success bodies may be
//! empty or JSON, error bodies may be `{message}`, `{error}` or plain text. The
//! body is classified once into a [`ResponseBody`] and every field lookup goes
//! through the ordered fallbacks below instead of probing ad hoc.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Uniform outcome of register and sign-in calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResult {
    pub success: bool,
    pub message: String,
}

impl ApiResult {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Outcome of an email availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailCheck {
    pub success: bool,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EmailCheck {
    #[must_use]
    pub fn found(exists: bool) -> Self {
        Self {
            success: true,
            exists,
            message: None,
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            exists: false,
            message: Some(message.into()),
        }
    }
}

/// Response body as received, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Classifies raw body text. Unparseable text is kept as-is.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Non-empty string field of a JSON object body.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Json(value) => value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty()),
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// Boolean field of a JSON object body.
    #[must_use]
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        match self {
            Self::Json(value) => value.get(name).and_then(Value::as_bool),
            Self::Empty | Self::Text(_) => None,
        }
    }
}

/// One completed HTTP exchange: status plus the body text and its shape.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub text: String,
    pub body: ResponseBody,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: StatusCode, text: String) -> Self {
        let body = ResponseBody::parse(&text);
        Self { status, text, body }
    }

    /// Error message for a failed status: `message`, `error`, raw text, then
    /// `"<prefix> with status <code>"`.
    #[must_use]
    pub fn failure_message(&self, prefix: &str) -> String {
        self.body
            .str_field("message")
            .or_else(|| self.body.str_field("error"))
            .or_else(|| Some(self.text.as_str()).filter(|text| !text.is_empty()))
            .map_or_else(
                || format!("{prefix} with status {}", self.status.as_u16()),
                str::to_string,
            )
    }

    /// Success message: `message`, else the supplied default.
    #[must_use]
    pub fn success_message(&self, default: &str) -> String {
        self.body.str_field("message").unwrap_or(default).to_string()
    }

    /// `exists`, else the negation of `available`, else `false`.
    #[must_use]
    pub fn exists_flag(&self) -> bool {
        self.body
            .bool_field("exists")
            .or_else(|| self.body.bool_field("available").map(|available| !available))
            .unwrap_or(false)
    }
}
