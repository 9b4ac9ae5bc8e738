//! Client for the finance backend.

use super::http::{HttpClient, HttpConfig};
use crate::domain::{DashboardError, DashboardResponse};

/// Path of the transactions + balance endpoint.
pub const TRANSACTIONS_PATH: &str = "/transactions";

// ============================================================================
// API Client
// ============================================================================

/// Typed client for the backend's REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// A trailing `/` on the URL is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidInput` if the URL is not `http(s)://`
    /// and `DashboardError::ClientInit` if the HTTP client cannot be built.
    pub fn new(base_url: &str, config: HttpConfig) -> Result<Self, DashboardError> {
        let base_url = normalize_base_url(base_url)?;
        let http = HttpClient::with_config(config)?;
        Ok(Self { http, base_url })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the transaction list and balance summary.
    ///
    /// # Errors
    ///
    /// - `Network` when the request cannot be sent or times out
    /// - `Status` when the backend answers with a non-2xx status
    /// - `Decode` when the body is not the expected JSON shape
    pub async fn get_transactions(&self) -> Result<DashboardResponse, DashboardError> {
        let url = format!("{}{}", self.base_url, TRANSACTIONS_PATH);
        tracing::debug!(%url, "fetching transactions");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload: DashboardResponse = serde_json::from_slice(&body)
            .map_err(|e| DashboardError::decode(format!("unexpected /transactions body: {e}")))?;

        tracing::debug!(
            transactions = payload.transactions.len(),
            "transactions fetched"
        );
        Ok(payload)
    }
}

/// Validates the scheme and strips trailing slashes.
fn normalize_base_url(base_url: &str) -> Result<String, DashboardError> {
    let trimmed = base_url.trim().trim_end_matches('/');

    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(DashboardError::invalid_input(format!(
            "API URL must start with http:// or https://, got '{base_url}'"
        )));
    }

    Ok(trimmed.to_string())
}

// ============================================================================
// Tests
// ============================================================================
