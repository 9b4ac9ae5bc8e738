//! Transaction types as sent by the backend and as shown on screen.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::amount::{Amount, RawAmount};
use super::error::DashboardError;

// ============================================================================
// Transaction Kind
// ============================================================================

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
}

impl TransactionKind {
    /// Wire name of the kind (`income` / `outcome`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }

    /// Prefix put in front of a formatted value of this kind.
    #[must_use]
    pub const fn sign_prefix(self) -> &'static str {
        match self {
            Self::Income => "",
            Self::Outcome => "- ",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Category
// ============================================================================

/// Category a transaction belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category title, e.g. "Food".
    pub title: String,
}

// ============================================================================
// Creation Timestamp
// ============================================================================

/// Parsed `created_at` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// A plain calendar date (`2020-04-20`).
    Date(NaiveDate),
    /// A date-time without offset, taken as wall-clock time.
    Local(NaiveDateTime),
    /// An instant with an explicit offset (RFC 3339).
    Instant(DateTime<FixedOffset>),
}

impl CreatedAt {
    /// Parses the formats the backend is known to send.
    ///
    /// Returns `None` when the input matches none of them.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Some(Self::Instant(instant));
        }

        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(input, pattern) {
                return Some(Self::Local(datetime));
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .map(Self::Date)
    }
}

// ============================================================================
// Raw Transaction
// ============================================================================

/// A transaction exactly as returned by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Unique identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Magnitude of the transaction.
    pub value: RawAmount,
    /// Direction of the transaction.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category the transaction belongs to.
    pub category: Category,
    /// Creation timestamp as sent by the backend.
    pub created_at: String,
}

// ============================================================================
// Display Transaction
// ============================================================================

/// A transaction ready for display.
///
/// `value`, `kind` and `created_at` are the source of truth;
/// `formatted_value` and `formatted_date` are derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique identifier, used as the row key.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Validated magnitude.
    pub value: Amount,
    /// Direction of the transaction.
    pub kind: TransactionKind,
    /// Category title.
    pub category: String,
    /// Parsed creation timestamp.
    pub created_at: CreatedAt,
    /// `value` formatted as currency, prefixed with `- ` for outcomes.
    pub formatted_value: String,
    /// `created_at` formatted as `dd/mm/yyyy`.
    pub formatted_date: String,
}

impl RawTransaction {
    /// Validates the creation timestamp.
    pub(crate) fn parse_created_at(&self) -> Result<CreatedAt, DashboardError> {
        CreatedAt::parse(&self.created_at)
            .ok_or_else(|| DashboardError::invalid_date(&self.id, &self.created_at))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rstest::rstest;

    #[test]
    fn test_raw_transaction_from_api_json() {
        let json = serde_json::json!({
            "id": "1",
            "title": "Salary",
            "value": 5000,
            "type": "income",
            "category": { "id": "c1", "title": "Job" },
            "category_id": "c1",
            "created_at": "2020-04-20",
            "updated_at": "2020-04-20"
        });

        let txn: RawTransaction = serde_json::from_value(json).expect("should deserialize");

        assert_eq!(txn.id, "1");
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.category.title, "Job");
        assert_eq!(txn.value, RawAmount::Number(5000.0));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = serde_json::json!({
            "id": "1",
            "title": "Gift",
            "value": 10,
            "type": "transfer",
            "category": { "title": "Misc" },
            "created_at": "2020-04-20"
        });

        assert!(serde_json::from_value::<RawTransaction>(json).is_err());
    }

    #[rstest]
    #[case::date_only("2020-04-20")]
    #[case::rfc3339_utc("2020-04-20T12:00:00.000Z")]
    #[case::rfc3339_offset("2020-04-20T09:00:00-03:00")]
    #[case::naive_t("2020-04-20T12:00:00")]
    #[case::naive_space("2020-04-20 12:00:00.123")]
    fn test_created_at_formats(#[case] input: &str) {
        let parsed = CreatedAt::parse(input).expect("should parse");
        let day = match parsed {
            CreatedAt::Date(date) => date.day(),
            CreatedAt::Local(datetime) => datetime.day(),
            CreatedAt::Instant(instant) => instant.day(),
        };
        assert_eq!(day, 20, "input={input}");
    }

    #[test]
    fn test_created_at_rejects_garbage() {
        for input in ["", "yesterday", "20/04/2020", "2020-13-01"] {
            assert_eq!(CreatedAt::parse(input), None, "input={input:?}");
        }
    }

    #[test]
    fn test_kind_sign_prefix() {
        assert_eq!(TransactionKind::Income.sign_prefix(), "");
        assert_eq!(TransactionKind::Outcome.sign_prefix(), "- ");
        assert_eq!(TransactionKind::Outcome.to_string(), "outcome");
    }
}
