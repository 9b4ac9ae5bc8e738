//! Balance summary cards.
//!
//! Three cards side by side: Entradas (income), Saídas (outcome) and Total.
//! Each card has a stable identifier so external checks (the `print --json`
//! output, tests) can address a card without depending on its label.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::Balance;
use crate::state::LoadState;
use crate::theme::{INCOME_COLOR, MUTED_COLOR, OUTCOME_COLOR, TOTAL_COLOR};

use super::helpers::create_border_block;

/// Rows taken by the card strip.
pub const CARDS_HEIGHT: u16 = 5;

/// Value shown while the fetch is in flight.
const LOADING_VALUE: &str = "...";

/// Value shown when there is nothing to display.
const UNAVAILABLE_VALUE: &str = "--";

// ============================================================================
// Card Kind
// ============================================================================

/// One of the three summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    /// Cards in display order.
    pub const ALL: [Self; 3] = [Self::Income, Self::Outcome, Self::Total];

    /// Stable identifier of the card.
    #[must_use]
    pub const fn test_id(self) -> &'static str {
        match self {
            Self::Income => "balance-income",
            Self::Outcome => "balance-outcome",
            Self::Total => "balance-total",
        }
    }

    /// Card title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Entradas",
            Self::Outcome => "Saídas",
            Self::Total => "Total",
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Income => "▲",
            Self::Outcome => "▼",
            Self::Total => "$",
        }
    }

    const fn style(self) -> Style {
        match self {
            Self::Income => Style::new().fg(INCOME_COLOR),
            Self::Outcome => Style::new().fg(OUTCOME_COLOR),
            Self::Total => Style::new().fg(TOTAL_COLOR),
        }
    }

    /// Formatted balance figure this card shows.
    #[must_use]
    pub fn value(self, balance: &Balance) -> &str {
        match self {
            Self::Income => &balance.formatted_income,
            Self::Outcome => &balance.formatted_outcome,
            Self::Total => &balance.formatted_total,
        }
    }
}

/// Text a card shows for the given load state.
#[must_use]
pub fn card_text(kind: CardKind, load: &LoadState) -> &str {
    match load {
        LoadState::Loading => LOADING_VALUE,
        LoadState::Loaded(dashboard) => kind.value(&dashboard.balance),
        LoadState::Failed(_) => UNAVAILABLE_VALUE,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the three summary cards.
pub fn render(frame: &mut Frame, area: Rect, load: &LoadState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (kind, column) in CardKind::ALL.into_iter().zip(columns.iter()) {
        render_card(frame, *column, kind, card_text(kind, load));
    }
}

fn render_card(frame: &mut Frame, area: Rect, kind: CardKind, value: &str) {
    // The total card is the highlighted one.
    let accent = matches!(kind, CardKind::Total).then(|| kind.style());
    let block = create_border_block(kind.label(), accent);

    let lines = vec![
        Line::from(Span::styled(kind.icon(), kind.style())),
        Line::from(Span::styled(
            value.to_string(),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(kind.test_id(), Style::new().fg(MUTED_COLOR))),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, format_dashboard};
    use crate::state::FetchFailure;
    use crate::test_utils::{ResponseMother, buffer_to_string};
    use chrono::Utc;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(load: &LoadState) -> String {
        let backend = TestBackend::new(90, CARDS_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), load))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_test_ids_are_stable() {
        let ids: Vec<_> = CardKind::ALL.iter().map(|k| k.test_id()).collect();
        assert_eq!(ids, ["balance-income", "balance-outcome", "balance-total"]);
    }

    #[test]
    fn test_loaded_cards_show_balance() {
        let dashboard = format_dashboard(&ResponseMother::salary(), &Utc).unwrap();
        let load = LoadState::Loaded(dashboard);

        assert_eq!(card_text(CardKind::Income, &load), "R$ 5.000,00");
        assert_eq!(card_text(CardKind::Outcome, &load), "R$ 0,00");
        assert_eq!(card_text(CardKind::Total, &load), "R$ 5.000,00");

        let content = draw(&load);
        for label in ["Entradas", "Saídas", "Total", "R$ 5.000,00", "R$ 0,00"] {
            assert!(content.contains(label), "missing {label}: {content}");
        }
    }

    #[test]
    fn test_placeholder_values() {
        assert_eq!(card_text(CardKind::Total, &LoadState::Loading), "...");

        let failed = LoadState::Failed(FetchFailure {
            kind: ErrorKind::Network,
            message: "down".to_string(),
        });
        assert_eq!(card_text(CardKind::Income, &failed), "--");
        assert!(draw(&failed).contains("--"));
    }
}
