use super::{
    config::{join_path, ApiConfig},
    error::ApiError,
    response::{ApiResult, EmailCheck, RawResponse},
    types::{LoginRequest, RegisterRequest},
};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info_span, instrument, warn, Instrument};
use url::Url;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const CHECK_EMAIL_PATH: &str = "/auth/check-email";

const REGISTER_SUCCESS: &str = "User registered successfully";
const LOGIN_SUCCESS: &str = "Login successful";
const REQUEST_FAILED: &str = "Request failed";
const LOGIN_FAILED: &str = "Login failed";

/// Client for the authentication API.
///
/// Operations never return an error: server-reported and transport failures
/// are folded into the returned result. Cloning is cheap and clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client from explicit configuration.
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|err| ApiError::network(&err))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Register a new account.
    #[instrument(skip_all)]
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult {
        let outcome = self.post_json(REGISTER_PATH, request).await;
        message_result(outcome, REGISTER_SUCCESS, REQUEST_FAILED)
    }

    /// Sign in with email and password.
    #[instrument(skip_all)]
    pub async fn sign_in(&self, request: &LoginRequest) -> ApiResult {
        let outcome = self.post_json(LOGIN_PATH, request).await;
        message_result(outcome, LOGIN_SUCCESS, LOGIN_FAILED)
    }

    /// Ask the backend whether an account already uses `email`.
    #[instrument(skip_all)]
    pub async fn check_email_exists(&self, email: &str) -> EmailCheck {
        match self.get(CHECK_EMAIL_PATH, &[("email", email)]).await {
            Ok(response) if response.status.is_success() => {
                EmailCheck::found(response.exists_flag())
            }
            Ok(response) => {
                let message = response.failure_message(REQUEST_FAILED);
                warn!(status = response.status.as_u16(), "email check rejected: {message}");
                EmailCheck::failed(message)
            }
            Err(err) => {
                warn!("email check failed: {err}");
                EmailCheck::failed(err.message())
            }
        }
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&join_path(&self.config.base_address(), path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(path, &[])?;
        let request = self.client.post(url.clone()).json(body);
        self.send(&Method::POST, &url, request).await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(path, query)?;
        let request = self.client.get(url.clone());
        self.send(&Method::GET, &url, request).await
    }

    /// Send the request and read the whole body under the configured deadline.
    /// Dropping the exchange future on expiry aborts the in-flight request.
    async fn send(
        &self,
        method: &Method,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<RawResponse, ApiError> {
        // the query may carry an email address, keep it out of logs
        debug!("api request: {} {}", method, url.path());

        let span = info_span!(
            "api.request",
            http.method = %method,
            http.host = url.host_str().unwrap_or_default(),
            http.path = url.path()
        );

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, ApiError>(RawResponse::new(status, text))
        };

        let limit = self.config.timeout;
        match timeout(limit, exchange).instrument(span).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(limit)),
        }
    }
}

fn message_result(
    outcome: Result<RawResponse, ApiError>,
    success_default: &str,
    failure_prefix: &str,
) -> ApiResult {
    match outcome {
        Ok(response) if response.status.is_success() => {
            ApiResult::ok(response.success_message(success_default))
        }
        Ok(response) => {
            let message = response.failure_message(failure_prefix);
            warn!(status = response.status.as_u16(), "request rejected: {message}");
            ApiResult::failed(message)
        }
        Err(err) => {
            warn!("request failed: {err}");
            ApiResult::failed(err.message())
        }
    }
}
