use std::time::Duration;

/// Base URL of the public NanoAI fix API.
pub const DEFAULT_BASE_URL: &str = "https://flow-api.nanoai.pics/api/fix";

/// Bearer token used when no token was supplied at runtime.
///
/// This is the shared demo credential for the public playground. It is a
/// configuration default, not a security mechanism; real deployments
/// inject their own token via `ClientConfig` or the `NANOAI_API_TOKEN`
/// environment variable at the CLI boundary.
pub const DEFAULT_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.nanoai-public-demo";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`NanoAiClient`](crate::NanoAiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,

    /// Fallback bearer token used when `set_token` was never called.
    pub default_token: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_token: DEFAULT_TOKEN.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration for the public demo API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the fallback bearer token.
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.default_token = token.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
