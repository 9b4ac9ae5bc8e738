//! Error types for dashboard fetching and decoding.
//!
//! Every failure the dashboard can hit while talking to the backend or
//! turning its payload into display records is a [`DashboardError`]. The
//! view only cares about the coarse [`ErrorKind`], which decides how the
//! failure is presented and whether a retry makes sense.

use thiserror::Error;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`DashboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend could not be reached or answered with an error status.
    Network,
    /// The backend answered, but the payload could not be understood.
    Decode,
    /// Local misconfiguration (bad URL, HTTP client setup).
    Config,
}

impl ErrorKind {
    /// Short label shown in the error panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Decode => "Invalid response",
            Self::Config => "Configuration error",
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error type for dashboard client and transform operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// JSON parsing or payload shape errors.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of what failed to decode.
        message: String,
    },

    /// A monetary field was not a valid decimal number.
    #[error("Invalid amount for {field}: '{value}'")]
    InvalidAmount {
        /// Which field carried the bad value (e.g. "balance.income").
        field: String,
        /// The offending raw value.
        value: String,
    },

    /// A transaction's `created_at` could not be parsed as a date.
    #[error("Invalid date for transaction '{id}': '{value}'")]
    InvalidDate {
        /// Transaction identifier.
        id: String,
        /// The offending raw value.
        value: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// Invalid configuration or user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DashboardError {
    /// Create a new decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new invalid amount error.
    #[must_use]
    pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new invalid date error.
    #[must_use]
    pub fn invalid_date(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Decode { .. } | Self::InvalidAmount { .. } | Self::InvalidDate { .. } => {
                ErrorKind::Decode
            }
            Self::ClientInit(_) | Self::InvalidInput(_) => ErrorKind::Config,
        }
    }

    /// Returns `true` if trying the same request again could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::Decode)
    }

    /// Convert to a `color_eyre::Report` for application-level propagation.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
