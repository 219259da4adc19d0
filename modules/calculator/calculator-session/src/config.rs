use std::time::Duration;

/// Default calculator API root when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/calculator";

/// Configuration for [`CalculatorHttpClient`](crate::CalculatorHttpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Absolute `http://` URL of the calculator routes, e.g. `http://host:5000/api/calculator`.
    pub base_url: String,

    /// Per-request timeout covering connect, send and body read (default: 10s).
    pub request_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl HttpClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
