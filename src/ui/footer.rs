//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::LoadState;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for the current load state.
///
/// Retry is only offered after a failure.
#[must_use]
pub fn hints(load: &LoadState) -> &'static str {
    if load.is_failed() {
        "q:Quit  r:Retry  ↑↓/jk:Move  g/G:First/Last"
    } else {
        "q:Quit  ↑↓/jk:Move  g/G:First/Last"
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, load: &LoadState) {
    let footer = Paragraph::new(hints(load))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::state::FetchFailure;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_retry_hint_only_after_failure() {
        assert!(!hints(&LoadState::Loading).contains("r:Retry"));

        let failed = LoadState::Failed(FetchFailure {
            kind: ErrorKind::Decode,
            message: String::new(),
        });
        assert!(hints(&failed).contains("r:Retry"));
    }

    #[test]
    fn test_footer_rendering_narrow_terminal() {
        for width in [10, 40, 80] {
            let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
            terminal
                .draw(|frame| render(frame, frame.area(), &LoadState::Loading))
                .unwrap();
            let content = buffer_to_string(terminal.backend().buffer());
            assert_eq!(content.lines().count(), 1);
        }
    }
}
