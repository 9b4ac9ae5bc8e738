//! Message processing for the finboard application.

use chrono::Local;

use super::{App, AppMessage, FetchFailure, LoadState};
use crate::domain::format_dashboard;

impl App {
    /// Drains pending messages. Returns `true` if any state changed.
    pub(crate) fn process_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.message_rx.try_recv() {
            changed |= self.apply_message(message);
        }
        changed
    }

    /// Applies one message. Returns `true` if state changed.
    pub(crate) fn apply_message(&mut self, message: AppMessage) -> bool {
        match message {
            AppMessage::DashboardFetched { generation, result } => {
                if self.disposed {
                    tracing::debug!(generation, "dropping fetch result after unmount");
                    return false;
                }
                if generation != self.fetch_generation {
                    tracing::debug!(
                        generation,
                        current = self.fetch_generation,
                        "dropping stale fetch result"
                    );
                    return false;
                }

                self.fetch_task = None;
                match result.and_then(|response| {
                    format_dashboard(&response, &Local).map_err(|err| {
                        tracing::warn!("dashboard payload rejected: {err}");
                        FetchFailure::from(&err)
                    })
                }) {
                    Ok(dashboard) => {
                        tracing::info!(
                            transactions = dashboard.transactions.len(),
                            "dashboard loaded"
                        );
                        self.data.set_loaded(dashboard);
                    }
                    Err(failure) => {
                        self.data.selected = None;
                        self.data.load = LoadState::Failed(failure);
                    }
                }
                true
            }
        }
    }
}
