//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::{BORDER_STYLE, TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a rounded bordered block with the given title.
///
/// `accent` replaces the default border style, used to highlight a block.
#[must_use]
pub fn create_border_block(title: &str, accent: Option<Style>) -> Block<'_> {
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };
    let border_style = accent.unwrap_or(BORDER_STYLE);
    let title_style = accent.map_or(TITLE_STYLE, |style| TITLE_STYLE.patch(style));

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border::ROUNDED)
        .border_style(border_style)
}

/// Builds a centered, wrapped paragraph for status messages inside `block`.
#[must_use]
pub fn status_paragraph<'a>(lines: Vec<Line<'a>>, block: Block<'a>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Vertical offset that centers `content_height` lines inside `area`,
/// accounting for a one-cell border.
#[must_use]
pub fn centered_padding(area: Rect, content_height: u16) -> u16 {
    area.height.saturating_sub(2).saturating_sub(content_height) / 2
}

// ============================================================================
// Tests
// ============================================================================
