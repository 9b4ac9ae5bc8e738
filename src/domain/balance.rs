//! Account balance summary.

use serde::{Deserialize, Serialize};

use super::{Amount, RawAmount};

/// Balance totals as returned by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBalance {
    /// Sum of all income transactions.
    pub income: RawAmount,
    /// Sum of all outcome transactions.
    pub outcome: RawAmount,
    /// Net total, expected to equal `income - outcome`.
    pub total: RawAmount,
}

/// Balance totals ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Balance {
    /// Validated income total.
    pub income: Amount,
    /// Validated outcome total.
    pub outcome: Amount,
    /// Validated net total, taken as sent.
    pub total: Amount,
    /// Income as shown on its card, e.g. `R$ 5.000,00`.
    pub formatted_income: String,
    /// Outcome as shown on its card.
    pub formatted_outcome: String,
    /// Net total as shown on its card.
    pub formatted_total: String,
}

impl Balance {
    /// Returns `true` when `total == income - outcome`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.income - self.outcome == self.total
    }
}
