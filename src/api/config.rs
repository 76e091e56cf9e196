//! Client configuration: backend base address and request deadline.
//!
//! The base address comes from two optional sources. The environment value
//! (`AUTH_PORTAL_API_BASE_URL`) is read once when the configuration is loaded;
//! the override is supplied explicitly by the embedding program (the CLI passes
//! `--api-base-url`). Blank values count as absent. Configuration values are
//! public; do not store secrets here.

use std::time::Duration;

/// Environment variable consulted for the backend base address.
pub const ENV_API_BASE_URL: &str = "AUTH_PORTAL_API_BASE_URL";
/// Base address used when neither source provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Default request deadline (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration threaded into [`super::ApiClient`] at construction time.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub env_base_url: Option<String>,
    pub override_base_url: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env_base_url: None,
            override_base_url: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: crate::APP_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads the environment value and keeps the remaining defaults.
    #[must_use]
    pub fn load() -> Self {
        Self {
            env_base_url: std::env::var(ENV_API_BASE_URL).ok(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_override(mut self, base_url: Option<String>) -> Self {
        self.override_base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Effective base address for the next call.
    #[must_use]
    pub fn base_address(&self) -> String {
        resolve_base_address(
            self.env_base_url.as_deref(),
            self.override_base_url.as_deref(),
        )
    }
}

/// Picks the first non-blank source, falling back to [`DEFAULT_API_BASE_URL`].
///
/// The chosen value is returned untouched; trimming only decides whether a
/// source counts as present.
#[must_use]
pub fn resolve_base_address(env: Option<&str>, override_value: Option<&str>) -> String {
    [env, override_value]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

/// Joins a base address and an absolute path, dropping one trailing slash.
#[must_use]
pub fn join_path(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}
