//! UI rendering module for the finboard TUI.
//!
//! # Module Structure
//!
//! - `header` - Logo and backend URL, large or small
//! - `cards` - Income, outcome and total cards
//! - `table` - Transactions table and its status panels
//! - `footer` - Keyboard shortcuts
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod cards;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod table;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::App;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function: header, cards, table and footer stacked vertically.
///
/// Rendering only reads `app`; the same state always draws the same screen.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.header_size.height()),
            Constraint::Length(cards::CARDS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let load = app.load_state();

    header::render(frame, chunks[0], app.header_size, app.api_url());
    cards::render(frame, chunks[1], load);
    table::render(frame, chunks[2], load, app.data.selected);
    footer::render(frame, chunks[3], load);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiClient, HttpConfig};
    use crate::domain::{DashboardResponse, ErrorKind};
    use crate::state::{AppConfig, AppMessage, FetchFailure};
    use crate::test_utils::{ResponseMother, TransactionMother, buffer_to_string, test_terminal};
    use crate::ui::header::HeaderSize;

    fn app_with(result: Result<DashboardResponse, FetchFailure>) -> App {
        let client = ApiClient::new("http://localhost:3333", HttpConfig::default()).unwrap();
        let mut app = App::with_client(client, &AppConfig::default());
        app.fetch_generation = 1;
        app.apply_message(AppMessage::DashboardFetched {
            generation: 1,
            result,
        });
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_salary_scenario() {
        let content = draw(&app_with(Ok(ResponseMother::salary())));

        let cards = content
            .lines()
            .find(|line| line.contains("R$ 5.000,00") && line.contains("R$ 0,00"))
            .expect("card values on one row");
        assert_eq!(cards.matches("R$ 5.000,00").count(), 2, "{cards}");

        let row = content.lines().find(|l| l.contains("Salary")).unwrap();
        assert!(row.contains("R$ 5.000,00"));
        assert!(row.contains("Job"));
        assert!(row.contains("20/04/2020"));
        assert!(!row.contains("- R$"));
    }

    #[test]
    fn test_outcome_row_is_prefixed() {
        let content = draw(&app_with(Ok(ResponseMother::with_transactions(vec![
            TransactionMother::outcome("2", "Website Hosting", 1000.0),
        ]))));

        let row = content.lines().find(|l| l.contains("Website Hosting")).unwrap();
        assert!(row.contains("- R$ 1.000,00"), "{row}");
    }

    #[test]
    fn test_empty_state() {
        let content = draw(&app_with(Ok(ResponseMother::empty())));

        assert_eq!(content.matches("R$ 0,00").count(), 3, "{content}");
        assert!(content.contains("Título"));
        assert!(content.contains("No transactions yet"));
    }

    #[test]
    fn test_failed_state() {
        let content = draw(&app_with(Err(FetchFailure {
            kind: ErrorKind::Network,
            message: "Request failed with status 500".to_string(),
        })));

        assert!(content.contains("Request failed with status 500"), "{content}");
        assert!(content.contains("press r to retry"));
        assert!(content.contains("r:Retry"));
        assert!(!content.contains("R$"));
    }

    #[test]
    fn test_small_header_layout() {
        let mut app = app_with(Ok(ResponseMother::salary()));
        app.header_size = HeaderSize::Small;
        let content = draw(&app);

        assert!(!content.contains("Controle financeiro"));
        assert!(content.contains("Salary"));
    }

    #[test]
    fn test_render_is_stable() {
        let app = app_with(Ok(ResponseMother::salary()));
        assert_eq!(draw(&app), draw(&app));
    }
}
