//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::domain::transaction::Category;
use crate::domain::{DashboardResponse, RawAmount, RawBalance, RawTransaction, TransactionKind};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    #[must_use]
    pub fn income(id: &str, title: &str, value: f64) -> RawTransaction {
        RawTransaction {
            id: id.to_string(),
            title: title.to_string(),
            value: RawAmount::Number(value),
            kind: TransactionKind::Income,
            category: Category {
                title: "Sell".to_string(),
            },
            created_at: "2020-04-20".to_string(),
        }
    }

    #[must_use]
    pub fn outcome(id: &str, title: &str, value: f64) -> RawTransaction {
        RawTransaction {
            kind: TransactionKind::Outcome,
            category: Category {
                title: "Hosting".to_string(),
            },
            created_at: "2020-04-19".to_string(),
            ..Self::income(id, title, value)
        }
    }

    #[must_use]
    pub fn salary() -> RawTransaction {
        RawTransaction {
            category: Category {
                title: "Job".to_string(),
            },
            ..Self::income("1", "Salary", 5000.0)
        }
    }
}

pub struct ResponseMother;

impl ResponseMother {
    /// One income transaction and the matching balance.
    #[must_use]
    pub fn salary() -> DashboardResponse {
        DashboardResponse {
            transactions: vec![TransactionMother::salary()],
            balance: RawBalance {
                income: RawAmount::from("5000"),
                outcome: RawAmount::from("0"),
                total: RawAmount::from("5000"),
            },
        }
    }

    /// No transactions and a zeroed balance.
    #[must_use]
    pub fn empty() -> DashboardResponse {
        Self::with_transactions(Vec::new())
    }

    /// The given transactions with a zeroed balance.
    #[must_use]
    pub fn with_transactions(transactions: Vec<RawTransaction>) -> DashboardResponse {
        DashboardResponse {
            transactions,
            balance: RawBalance {
                income: RawAmount::Number(0.0),
                outcome: RawAmount::Number(0.0),
                total: RawAmount::Number(0.0),
            },
        }
    }
}

pub struct JsonMother;

impl JsonMother {
    /// `GET /transactions` body for the salary scenario.
    #[must_use]
    pub fn salary() -> serde_json::Value {
        serde_json::json!({
            "transactions": [{
                "id": "1",
                "title": "Salary",
                "value": 5000,
                "type": "income",
                "category": { "title": "Job" },
                "created_at": "2020-04-20"
            }],
            "balance": { "income": "5000", "outcome": "0", "total": "5000" }
        })
    }

    /// `GET /transactions` body with one income and one outcome.
    #[must_use]
    pub fn mixed() -> serde_json::Value {
        serde_json::json!({
            "transactions": [
                {
                    "id": "a1",
                    "title": "Computer",
                    "value": 5000,
                    "type": "income",
                    "category": { "title": "Sell" },
                    "created_at": "2020-04-20T12:00:00.000Z"
                },
                {
                    "id": "b2",
                    "title": "Website Hosting",
                    "value": 1000,
                    "type": "outcome",
                    "category": { "title": "Hosting" },
                    "created_at": "2020-04-19T12:00:00.000Z"
                }
            ],
            "balance": { "income": 5000, "outcome": 1000, "total": 4000 }
        })
    }

    /// `GET /transactions` body with nothing in it.
    #[must_use]
    pub fn empty() -> serde_json::Value {
        serde_json::json!({
            "transactions": [],
            "balance": { "income": 0, "outcome": 0, "total": 0 }
        })
    }
}

// ============================================================================
// Terminal Helpers
// ============================================================================

/// Creates a 100x30 test terminal.
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("terminal creation should succeed")
}

/// Flattens a buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity(usize::from(area.width + 1) * usize::from(area.height));
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
