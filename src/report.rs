//! One-shot, non-interactive rendering of the dashboard.
//!
//! `finboard print` fetches once and writes the same figures the TUI shows,
//! either as aligned text or as JSON keyed by the card identifiers.

use chrono::Local;
use serde_json::{Value, json};

use crate::client::ApiClient;
use crate::domain::{Dashboard, DashboardError, format_dashboard};
use crate::ui::cards::CardKind;
use crate::ui::table::COLUMNS;

const COLUMN_GAP: &str = "  ";

/// Output mode of `finboard print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Aligned plain text.
    Text,
    /// Pretty-printed JSON keyed by card id.
    Json,
}

/// Fetches the dashboard once and renders it.
///
/// # Errors
///
/// Returns an error if the fetch fails or the payload is rejected.
pub async fn run(client: &ApiClient, format: ReportFormat) -> Result<String, DashboardError> {
    let response = client.get_transactions().await?;
    let dashboard = format_dashboard(&response, &Local)?;

    Ok(match format {
        ReportFormat::Text => render_text(&dashboard),
        ReportFormat::Json => {
            let mut out = serde_json::to_string_pretty(&render_json(&dashboard))
                .map_err(|err| DashboardError::decode(err.to_string()))?;
            out.push('\n');
            out
        }
    })
}

// ============================================================================
// Text
// ============================================================================

/// Balance block followed by the transactions table.
#[must_use]
pub fn render_text(dashboard: &Dashboard) -> String {
    let label_width = CardKind::ALL
        .iter()
        .map(|kind| kind.label().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = CardKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<label_width$}{COLUMN_GAP}{}",
                kind.label(),
                kind.value(&dashboard.balance)
            )
        })
        .collect();
    lines.push(String::new());

    if dashboard.is_empty() {
        lines.push("No transactions yet".to_string());
    } else {
        let rows: Vec<[&str; 4]> = dashboard
            .transactions
            .iter()
            .map(|t| {
                [
                    t.title.as_str(),
                    t.formatted_value.as_str(),
                    t.category.as_str(),
                    t.formatted_date.as_str(),
                ]
            })
            .collect();
        lines.extend(table_lines(&rows));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn table_lines(rows: &[[&str; 4]]) -> Vec<String> {
    let mut widths = COLUMNS.map(|name| name.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(&COLUMNS)
        .chain(rows)
        .map(|row| format_row(row, &widths))
        .collect()
}

/// Prices are right-aligned, everything else left-aligned.
fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == 1 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

// ============================================================================
// JSON
// ============================================================================

/// Card values keyed by card identifier, plus the formatted transactions.
#[must_use]
pub fn render_json(dashboard: &Dashboard) -> Value {
    let mut out = serde_json::Map::new();
    for kind in CardKind::ALL {
        out.insert(
            kind.test_id().to_string(),
            Value::String(kind.value(&dashboard.balance).to_string()),
        );
    }

    let transactions = dashboard
        .transactions
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "title": t.title,
                "type": t.kind.as_str(),
                "value": t.formatted_value,
                "category": t.category,
                "date": t.formatted_date,
            })
        })
        .collect();
    out.insert("transactions".to_string(), Value::Array(transactions));

    Value::Object(out)
}

// ============================================================================
// Tests
// ============================================================================
