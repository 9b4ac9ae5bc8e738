//! State management for the finboard TUI.
//!
//! The dashboard moves through three load states:
//!
//! ```text
//!            mount / retry
//!   ┌──────────────────────────┐
//!   ▼                          │
//! Loading ──ok──▶ Loaded       │
//!   │                          │
//!   └──err──▶ Failed ──────────┘
//! ```
//!
//! A single fetch task runs per mount (or per retry). Its result comes back
//! over a channel tagged with the fetch generation, so results from an
//! aborted or superseded fetch, or results arriving after the view was
//! disposed, are dropped instead of overwriting state.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::domain::{Dashboard, DashboardError, DashboardResponse, ErrorKind};
use crate::ui::header::HeaderSize;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DashboardState;

// ============================================================================
// Load State
// ============================================================================

/// A failed fetch, reduced to what the view needs to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Coarse classification of the failure.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<&DashboardError> for FetchFailure {
    fn from(err: &DashboardError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Where the dashboard is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The fetch is in flight.
    #[default]
    Loading,
    /// The payload arrived and was transformed.
    Loaded(Dashboard),
    /// The fetch or the transform failed.
    Failed(FetchFailure),
}

impl LoadState {
    /// Returns the dashboard when loaded.
    #[must_use]
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Self::Loaded(dashboard) => Some(dashboard),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Returns `true` when a retry is allowed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch finished.
    DashboardFetched {
        /// Generation of the fetch that produced this result.
        generation: u64,
        /// Raw payload or the reason it could not be obtained.
        result: Result<DashboardResponse, FetchFailure>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Dashboard data and table selection.
    pub data: DashboardState,

    /// Size of the header region.
    pub header_size: HeaderSize,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Fetch Lifecycle
    // ========================================================================
    /// Generation of the most recent fetch; 0 before mount.
    pub(crate) fetch_generation: u64,

    /// Handle of the in-flight fetch task, if any.
    pub(crate) fetch_task: Option<JoinHandle<()>>,

    /// Set once the view is unmounted; no state changes after that.
    pub(crate) disposed: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver is gone once the app is
    // dropped and there is nobody left to tell.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Backend client.
    pub(crate) client: ApiClient,
}

impl App {
    /// Current load state.
    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.data.load
    }

    /// Backend base URL, shown in the header.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, transform on arrival
mod app_messages;

// Key handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
