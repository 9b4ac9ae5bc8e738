//! Transactions table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table, TableState},
};

use crate::domain::{Transaction, TransactionKind};
use crate::state::{FetchFailure, LoadState};
use crate::theme::{
    ERROR_COLOR, INCOME_COLOR, MUTED_COLOR, OUTCOME_COLOR, SELECTED_STYLE, TABLE_HEADER_STYLE,
};

use super::helpers::{centered_padding, create_border_block, status_paragraph};

const TITLE: &str = "Transações";

/// Column headers, in display order.
pub const COLUMNS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

const WIDTHS: [Constraint; 4] = [
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(12),
];

// ============================================================================
// Rendering
// ============================================================================

/// Render the transactions table, or a status panel when there is nothing
/// to tabulate.
pub fn render(frame: &mut Frame, area: Rect, load: &LoadState, selected: Option<usize>) {
    match load {
        LoadState::Loading => render_status(
            frame,
            area,
            vec![Line::from(Span::styled(
                "Loading transactions...",
                Style::new().fg(MUTED_COLOR),
            ))],
        ),
        LoadState::Failed(failure) => render_status(frame, area, failure_lines(failure)),
        LoadState::Loaded(dashboard) => render_rows(frame, area, &dashboard.transactions, selected),
    }
}

fn render_rows(frame: &mut Frame, area: Rect, transactions: &[Transaction], selected: Option<usize>) {
    let block = create_border_block(TITLE, None);

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
        .style(TABLE_HEADER_STYLE)
        .bottom_margin(1);

    let rows: Vec<Row> = transactions.iter().map(transaction_row).collect();
    let is_empty = rows.is_empty();

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(SELECTED_STYLE)
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);

    if is_empty {
        // Below the header row and its margin.
        let hint_area = Rect::new(
            area.x + 1,
            area.y + 3,
            area.width.saturating_sub(2),
            area.height.saturating_sub(4).min(1),
        );
        let hint = Line::from(Span::styled(
            "No transactions yet",
            Style::new().fg(MUTED_COLOR),
        ))
        .centered();
        frame.render_widget(hint, hint_area);
    }
}

fn transaction_row(transaction: &Transaction) -> Row<'_> {
    let value_style = match transaction.kind {
        TransactionKind::Income => Style::new().fg(INCOME_COLOR),
        TransactionKind::Outcome => Style::new().fg(OUTCOME_COLOR),
    };

    Row::new(vec![
        Cell::from(transaction.title.as_str()),
        Cell::from(Span::styled(transaction.formatted_value.as_str(), value_style)),
        Cell::from(transaction.category.as_str()),
        Cell::from(transaction.formatted_date.as_str()),
    ])
}

fn failure_lines(failure: &FetchFailure) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            format!("Could not load transactions ({})", failure.kind.label()),
            Style::new().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(failure.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("press r to retry", Style::new().fg(MUTED_COLOR))),
    ]
}

fn render_status(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let padding = centered_padding(area, u16::try_from(lines.len()).unwrap_or(u16::MAX));
    let mut padded = vec![Line::from(""); usize::from(padding)];
    padded.extend(lines);

    let paragraph = status_paragraph(padded, create_border_block(TITLE, None));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, format_dashboard};
    use crate::test_utils::{ResponseMother, TransactionMother, buffer_to_string};
    use chrono::Utc;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(load: &LoadState, selected: Option<usize>) -> String {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), load, selected))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn loaded(response: crate::domain::DashboardResponse) -> LoadState {
        LoadState::Loaded(format_dashboard(&response, &Utc).unwrap())
    }

    #[test]
    fn test_renders_header_and_rows() {
        let load = loaded(ResponseMother::with_transactions(vec![
            TransactionMother::income("1", "Computer", 5000.0),
            TransactionMother::outcome("2", "Website Hosting", 1000.0),
        ]));
        let content = draw(&load, Some(0));

        for column in COLUMNS {
            assert!(content.contains(column), "missing {column}: {content}");
        }
        let computer = content.lines().find(|l| l.contains("Computer")).unwrap();
        assert!(computer.contains("R$ 5.000,00"));
        assert!(computer.contains("Sell"));
        assert!(computer.contains("20/04/2020"));

        let hosting = content.lines().find(|l| l.contains("Website Hosting")).unwrap();
        assert!(hosting.contains("- R$ 1.000,00"), "{hosting}");
        assert!(hosting.contains("19/04/2020"));
    }

    #[test]
    fn test_selected_row_has_marker() {
        let load = loaded(ResponseMother::with_transactions(vec![
            TransactionMother::income("1", "Computer", 5000.0),
            TransactionMother::outcome("2", "Website Hosting", 1000.0),
        ]));
        let content = draw(&load, Some(1));

        let hosting = content.lines().find(|l| l.contains("Website Hosting")).unwrap();
        assert!(hosting.contains('▶'));
        let computer = content.lines().find(|l| l.contains("Computer")).unwrap();
        assert!(!computer.contains('▶'));
    }

    #[test]
    fn test_empty_table_keeps_header_and_shows_hint() {
        let content = draw(&loaded(ResponseMother::empty()), None);
        assert!(content.contains("Título"), "{content}");
        assert!(content.contains("No transactions yet"), "{content}");
    }

    #[test]
    fn test_loading_placeholder() {
        let content = draw(&LoadState::Loading, None);
        assert!(content.contains("Loading transactions..."), "{content}");
        assert!(!content.contains("Título"));
    }

    #[test]
    fn test_failure_panel_offers_retry() {
        let failure = FetchFailure {
            kind: ErrorKind::Network,
            message: "connection refused".to_string(),
        };
        let content = draw(&LoadState::Failed(failure), None);
        assert!(content.contains(ErrorKind::Network.label()), "{content}");
        assert!(content.contains("connection refused"), "{content}");
        assert!(content.contains("press r to retry"), "{content}");
    }
}
