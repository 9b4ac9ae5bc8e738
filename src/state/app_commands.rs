//! Key handling for the App.

use crossterm::event::KeyEvent;

use super::App;
use crate::commands::{AppCommand, map_key};

impl App {
    /// Maps and executes a key press.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(command) = map_key(key) {
            self.execute_command(command);
        }
    }

    /// Executes a command against the current state.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Retry => {
                self.retry();
            }
            AppCommand::MoveUp => self.data.select_previous(),
            AppCommand::MoveDown => self.data.select_next(),
            AppCommand::MoveToFirst => self.data.select_first(),
            AppCommand::MoveToLast => self.data.select_last(),
        }
    }
}
