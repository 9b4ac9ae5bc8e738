//! Theme and styling constants for the finboard TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - headers and selection.
pub const PRIMARY_COLOR: Color = Color::Rgb(92, 51, 204);

/// Money coming in.
pub const INCOME_COLOR: Color = Color::Rgb(18, 164, 84);

/// Money going out.
pub const OUTCOME_COLOR: Color = Color::Rgb(232, 63, 91);

/// Highlight for the total card.
pub const TOTAL_COLOR: Color = Color::Rgb(255, 135, 44);

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title style for bordered blocks.
pub const TITLE_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

/// Style for the table header row.
pub const TABLE_HEADER_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected table row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);
