use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::{ApiResponse, ConnectionStatus, Payload};

/// HTTP client for the NanoAI fix API.
///
/// Issues bearer-authenticated requests against a fixed base URL and
/// normalizes every outcome into either an [`ApiResponse`] or an
/// [`ApiError`]. One instance carries one configuration; construct it
/// explicitly and pass it where it is needed.
pub struct NanoAiClient {
    base_url: String,
    token: Option<String>,
    default_token: String,
    http: reqwest::Client,
}

impl NanoAiClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Example
    /// ```no_run
    /// use nanoai_client::{ClientConfig, NanoAiClient};
    ///
    /// let config = ClientConfig::new().with_base_url("http://localhost:9000/api/fix");
    /// let client = NanoAiClient::new(config).unwrap();
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate the base URL up front; per-request URLs are built by
        // plain string concatenation, matching the server's route layout.
        Url::parse(&config.base_url).map_err(ApiError::network)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::network)?;

        Ok(Self {
            base_url: config.base_url,
            token: None,
            default_token: config.default_token,
            http,
        })
    }

    /// Create a client for the public demo API.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Replace the bearer token used by all subsequent requests.
    ///
    /// Any string is accepted, including the empty string.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The bearer token in effect: the runtime token if one was set,
    /// otherwise the configured default.
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or(&self.default_token)
    }

    /// Issue a request against `base_url + endpoint`.
    ///
    /// The body is serialized to JSON and attached only for POST, PUT
    /// and PATCH; GET and DELETE ignore it. The response body is parsed
    /// as JSON when the server declares `application/json`, and kept as
    /// raw text otherwise — in both cases before the status check, so a
    /// failure still carries whatever the server sent back.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url.as_str())
            .bearer_auth(self.token())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            if method == Method::POST || method == Method::PUT || method == Method::PATCH {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!("{} {} failed: {}", method, url, err);
            ApiError::network(err)
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let raw = response.text().await.map_err(|err| {
            tracing::warn!("{} {} body read failed: {}", method, url, err);
            ApiError::network(err)
        })?;

        let data = if is_json {
            Payload::Json(serde_json::from_str(&raw).map_err(|err| {
                tracing::warn!("{} {} returned malformed JSON: {}", method, url, err);
                ApiError::network(err)
            })?)
        } else {
            Payload::Text(raw)
        };

        if !status.is_success() {
            tracing::warn!("{} {} failed: HTTP {}", method, url, status);
            return Err(ApiError::Request {
                status: status.as_u16(),
                status_text,
                data,
            });
        }

        Ok(ApiResponse {
            success: true,
            status: status.as_u16(),
            data,
        })
    }

    /// GET request against `endpoint`.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse> {
        self.request(Method::GET, endpoint, None).await
    }

    /// POST request against `endpoint` with a JSON body.
    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// PUT request against `endpoint` with a JSON body.
    pub async fn put(&self, endpoint: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// DELETE request against `endpoint`.
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, endpoint, None).await
    }

    /// Token details for the current bearer token.
    ///
    /// Calls `GET /get-token`.
    pub async fn token_info(&self) -> Result<ApiResponse> {
        self.get("/get-token").await
    }

    /// Remaining account balance.
    ///
    /// Calls `GET /balance`.
    pub async fn balance(&self) -> Result<ApiResponse> {
        self.get("/balance").await
    }

    /// Whether solve tokens are currently available.
    ///
    /// Calls `GET /token-aval`.
    pub async fn token_availability(&self) -> Result<ApiResponse> {
        self.get("/token-aval").await
    }

    /// Submit a captcha task for solving.
    ///
    /// Calls `POST /solve` with the task object as the body.
    pub async fn solve(&self, task: &Value) -> Result<ApiResponse> {
        self.post("/solve", task).await
    }

    /// Probe the API by fetching token info.
    ///
    /// Never fails outward: any error is folded into a
    /// `connected: false` status carrying the error's message and
    /// payload.
    pub async fn test_connection(&self) -> ConnectionStatus {
        match self.token_info().await {
            Ok(response) => {
                tracing::debug!("Connection test succeeded");
                ConnectionStatus {
                    connected: true,
                    message: "Connection successful".to_string(),
                    data: Some(response.data),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!("Connection test failed: {}", err);
                ConnectionStatus {
                    connected: false,
                    message: err.to_string(),
                    data: None,
                    error: Some(err.data()),
                }
            }
        }
    }
}
