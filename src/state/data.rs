//! Dashboard data and table selection.

use super::LoadState;
use crate::domain::{Dashboard, Transaction};

/// Data state: what was fetched and which table row is selected.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Fetch lifecycle state.
    pub load: LoadState,
    /// Index of the selected table row.
    pub selected: Option<usize>,
}

impl DashboardState {
    /// Creates a new `DashboardState` in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the state with a loaded dashboard, selecting the first row
    /// if there is one.
    pub fn set_loaded(&mut self, dashboard: Dashboard) {
        self.selected = if dashboard.is_empty() { None } else { Some(0) };
        self.load = LoadState::Loaded(dashboard);
    }

    /// Resets to loading, dropping any previous data.
    pub fn set_loading(&mut self) {
        self.load = LoadState::Loading;
        self.selected = None;
    }

    /// Rows of the transactions table (empty unless loaded).
    #[must_use]
    pub fn rows(&self) -> &[Transaction] {
        self.load
            .dashboard()
            .map(|dashboard| dashboard.transactions.as_slice())
            .unwrap_or(&[])
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    pub fn select_previous(&mut self) {
        if self.rows().is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        if !self.rows().is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }
}
