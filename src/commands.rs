//! Key event to command mapping.
//!
//! Keeps key bindings separate from what the commands do, so the mapping
//! can be tested without an `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// All commands the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Fetch again after a failure.
    Retry,
    /// Select the previous table row.
    MoveUp,
    /// Select the next table row.
    MoveDown,
    /// Select the first table row.
    MoveToFirst,
    /// Select the last table row.
    MoveToLast,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command, or `None` for unbound keys.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<AppCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
        KeyCode::Char('r') => Some(AppCommand::Retry),
        KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::MoveDown),
        KeyCode::Home | KeyCode::Char('g') => Some(AppCommand::MoveToFirst),
        KeyCode::End | KeyCode::Char('G') => Some(AppCommand::MoveToLast),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
