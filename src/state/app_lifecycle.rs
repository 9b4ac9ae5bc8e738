//! Application lifecycle management.
//!
//! - `new()` builds the app from configuration
//! - `mount()` starts the one fetch a mount is allowed
//! - `retry()` starts a new fetch after a failure
//! - `unmount()` aborts the fetch and freezes state
//! - `run()` is the terminal event loop

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::domain::DashboardError;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, DashboardState, FetchFailure};

/// Redraw interval of the main loop.
const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App from configuration. Nothing is fetched until
    /// [`App::mount`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: &AppConfig) -> Result<Self, DashboardError> {
        let client = ApiClient::new(&config.api_url, config.http_config())?;
        Ok(Self::with_client(client, config))
    }

    pub(crate) fn with_client(client: ApiClient, config: &AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            data: DashboardState::new(),
            header_size: config.header_size,
            exit: false,
            fetch_generation: 0,
            fetch_task: None,
            disposed: false,
            message_tx,
            message_rx,
            client,
        }
    }

    /// Starts the initial fetch. Calling it again is a no-op.
    pub fn mount(&mut self) {
        if self.fetch_generation > 0 || self.disposed {
            return;
        }
        self.start_fetch();
    }

    /// Starts a new fetch if the previous one failed.
    ///
    /// Returns `true` if a fetch was started.
    pub fn retry(&mut self) -> bool {
        if self.disposed || !self.data.load.is_failed() {
            return false;
        }
        tracing::info!("retrying dashboard fetch");
        self.start_fetch();
        true
    }

    /// Aborts any in-flight fetch. Results that still arrive are ignored.
    pub fn unmount(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        if !self.disposed {
            tracing::debug!("dashboard unmounted");
        }
        self.disposed = true;
    }

    fn start_fetch(&mut self) {
        if let Some(previous) = self.fetch_task.take() {
            previous.abort();
        }

        self.fetch_generation += 1;
        self.data.set_loading();

        let generation = self.fetch_generation;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tracing::debug!(generation, url = client.base_url(), "starting dashboard fetch");
        self.fetch_task = Some(tokio::spawn(async move {
            let result = client.get_transactions().await.map_err(|err| {
                tracing::error!(
                    generation,
                    retryable = err.is_retryable(),
                    "dashboard fetch failed: {err}"
                );
                FetchFailure::from(&err)
            });
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::DashboardFetched { generation, result });
        }));
    }

    // ========================================================================
    // Event Loop
    // ========================================================================

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.mount();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            let changed = self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            let mut redraw = changed;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        redraw = true;
                    }
                    Event::Resize(_, _) => redraw = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                redraw = true;
                last_tick = Instant::now();
            }

            if redraw && !self.exit {
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            // Let the fetch task make progress on the runtime.
            tokio::task::yield_now().await;
        }

        self.unmount();
        Ok(())
    }
}
