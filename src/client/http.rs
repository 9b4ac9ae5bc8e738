//! HTTP client setup shared by the API client.

use reqwest::Client;
use std::time::Duration;

use crate::domain::DashboardError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Builds a pooled client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::ClientInit` if the TLS backend or connection
    /// pool cannot be set up.
    pub fn with_config(config: HttpConfig) -> Result<Self, DashboardError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()
            .map_err(|e| DashboardError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}
