//! HTTP clients for the finance backend.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ApiClient, HttpConfig};
//!
//! let client = ApiClient::new("http://localhost:3333", HttpConfig::default())?;
//! let payload = client.get_transactions().await?;
//! ```

pub mod api;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::ApiClient;
pub use http::HttpConfig;
