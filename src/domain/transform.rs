//! Turns the raw `/transactions` payload into display records.
//!
//! The raw payload is only borrowed. Every call builds new records, so the
//! same response can be transformed again (e.g. for a different timezone)
//! and raw values stay available for anything else that needs them.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use super::{Balance, DashboardError, RawBalance, RawTransaction, Transaction};
use crate::format::{format_date, format_value};

// ============================================================================
// Payload and View Model
// ============================================================================

/// Body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub transactions: Vec<RawTransaction>,
    pub balance: RawBalance,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dashboard {
    /// Rows of the transactions table, in payload order.
    pub transactions: Vec<Transaction>,
    /// Totals shown on the summary cards.
    pub balance: Balance,
}

impl Dashboard {
    /// Returns `true` when there are no transactions to list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// ============================================================================
// Transform
// ============================================================================

/// Builds the display records for a fetched payload.
///
/// Dates are rendered in `tz`.
///
/// # Errors
///
/// Returns a decode-class [`DashboardError`] if any amount or date in the
/// payload is malformed. Nothing partial is returned.
pub fn format_dashboard<Tz: TimeZone>(
    response: &DashboardResponse,
    tz: &Tz,
) -> Result<Dashboard, DashboardError> {
    let transactions = response
        .transactions
        .iter()
        .map(|raw| format_transaction(raw, tz))
        .collect::<Result<Vec<_>, _>>()?;

    let balance = format_balance(&response.balance)?;
    if !balance.is_consistent() {
        tracing::warn!(
            income = %balance.income,
            outcome = %balance.outcome,
            total = %balance.total,
            "balance total does not equal income minus outcome"
        );
    }

    Ok(Dashboard {
        transactions,
        balance,
    })
}

fn format_transaction<Tz: TimeZone>(
    raw: &RawTransaction,
    tz: &Tz,
) -> Result<Transaction, DashboardError> {
    let value = raw.value.to_amount(&format!("transaction '{}' value", raw.id))?;
    if value.is_negative() {
        return Err(DashboardError::invalid_amount(
            format!("transaction '{}' value", raw.id),
            raw.value.to_string(),
        ));
    }
    let created_at = raw.parse_created_at()?;

    Ok(Transaction {
        id: raw.id.clone(),
        title: raw.title.clone(),
        value,
        kind: raw.kind,
        category: raw.category.title.clone(),
        created_at,
        formatted_value: format!("{}{}", raw.kind.sign_prefix(), format_value(value)),
        formatted_date: format_date(&created_at, tz),
    })
}

fn format_balance(raw: &RawBalance) -> Result<Balance, DashboardError> {
    let income = raw.income.to_amount("balance.income")?;
    let outcome = raw.outcome.to_amount("balance.outcome")?;
    let total = raw.total.to_amount("balance.total")?;

    Ok(Balance {
        income,
        outcome,
        total,
        formatted_income: format_value(income),
        formatted_outcome: format_value(outcome),
        formatted_total: format_value(total),
    })
}

// ============================================================================
// Tests
// ============================================================================
