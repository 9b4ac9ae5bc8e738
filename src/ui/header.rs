//! Header rendering for finboard.
//!
//! The header comes in two sizes: `large` shows the logo, a tagline and the
//! backend URL on separate lines; `small` squeezes logo and URL onto one.

use clap::ValueEnum;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use serde::{Deserialize, Serialize};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Header Size
// ============================================================================

/// Size option of the header region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HeaderSize {
    /// Logo, tagline and URL on three lines.
    #[default]
    Large,
    /// Logo and URL on one line.
    Small,
}

impl HeaderSize {
    /// Rows taken by the header, borders included.
    #[must_use]
    pub const fn height(self) -> u16 {
        match self {
            Self::Large => 5,
            Self::Small => 3,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, size: HeaderSize, api_url: &str) {
    let block = create_border_block("", Some(Style::new().fg(PRIMARY_COLOR)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let url = Span::styled(api_url.to_string(), Style::new().fg(MUTED_COLOR));
    let lines = match size {
        HeaderSize::Large => vec![
            logo(),
            Line::from("Controle financeiro".italic()),
            Line::from(url),
        ],
        HeaderSize::Small => {
            let mut spans = logo().spans;
            spans.push("  ".into());
            spans.push(url);
            vec![Line::from(spans)]
        }
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    let padded = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(1),
        inner.height,
    );
    frame.render_widget(paragraph, padded);
}

fn logo() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "fin",
            Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
        ),
        "board".bold(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(size: HeaderSize) -> String {
        let backend = TestBackend::new(60, size.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), size, "http://localhost:3333"))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_large_header_has_tagline() {
        let content = draw(HeaderSize::Large);
        assert!(content.contains("finboard"), "{content}");
        assert!(content.contains("Controle financeiro"), "{content}");
        assert!(content.contains("http://localhost:3333"), "{content}");
    }

    #[test]
    fn test_small_header_is_one_line() {
        let content = draw(HeaderSize::Small);
        let line = content.lines().nth(1).expect("inner line");
        assert!(line.contains("finboard"), "{content}");
        assert!(line.contains("http://localhost:3333"), "{content}");
        assert!(!content.contains("Controle financeiro"));
    }

    #[test]
    fn test_header_heights() {
        assert_eq!(HeaderSize::Large.height(), 5);
        assert_eq!(HeaderSize::Small.height(), 3);
    }
}
