use crate::confirm::{Appearance, CONFIRM_WINDOW, ConfirmationToggle, Press};
use crate::errors::LogError;
use crate::models::Button;
use crate::sink::LogSink;
use crate::timestamp::api_timestamp;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Waiting for the confirming click.
    Armed(Button),
    /// Logged; go to this confirmation page.
    Navigate(String),
    /// Not logged; the toggle was reset so the user can retry.
    Failed(LogError),
}

#[derive(Debug, Default)]
struct Confirmation {
    toggle: ConfirmationToggle,
    expiry: Option<JoinHandle<()>>,
}

/// Drives the double-click confirmation and submits confirmed actions.
#[derive(Debug, Clone)]
pub struct Interaction {
    state: Arc<Mutex<Confirmation>>,
    reverts: Arc<AtomicU64>,
    sink: LogSink,
    window: Duration,
}

impl Interaction {
    pub fn new(sink: LogSink) -> Self {
        Self::with_window(sink, CONFIRM_WINDOW)
    }

    pub fn with_window(sink: LogSink, window: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(Confirmation::default())),
            reverts: Arc::new(AtomicU64::new(0)),
            sink,
            window,
        }
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub async fn press(&self, button: Button) -> PressOutcome {
        let press = {
            let mut state = self.state.lock().await;
            if let Some(expiry) = state.expiry.take() {
                expiry.abort();
            }
            let press = state.toggle.press(button);
            if let Press::Armed { generation, .. } = press {
                state.expiry = Some(self.spawn_expiry(generation));
            }
            press
        };

        match press {
            Press::Armed { button, generation } => {
                info!("armed {} (generation {generation})", button.key());
                PressOutcome::Armed(button)
            }
            Press::Confirmed(button) => self.confirm(button).await,
        }
    }

    async fn confirm(&self, button: Button) -> PressOutcome {
        let stamp = api_timestamp();
        let record = button.record(stamp.timestamp, stamp.date);
        info!("logging {}: {record:?}", button.key());

        match self.sink.submit(&record).await {
            Ok(message) => {
                info!("{} logged: {message}", button.key());
                PressOutcome::Navigate(button.confirmation_target())
            }
            Err(err) => {
                error!("failed to log {}: {err}", button.key());
                self.state.lock().await.toggle.reset();
                PressOutcome::Failed(err)
            }
        }
    }

    fn spawn_expiry(&self, generation: u64) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let reverts = Arc::clone(&self.reverts);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut state = state.lock().await;
            if state.toggle.expire(generation) {
                state.expiry = None;
                reverts.fetch_add(1, Ordering::SeqCst);
                info!("confirmation window elapsed, buttons reverted");
            }
        })
    }

    pub async fn armed(&self) -> Option<Button> {
        self.state.lock().await.toggle.armed()
    }

    /// Appearance of every button, in page order.
    pub async fn appearances(&self) -> Vec<(Button, Appearance)> {
        let state = self.state.lock().await;
        Button::ALL
            .iter()
            .map(|&button| (button, state.toggle.appearance(button)))
            .collect()
    }

    #[cfg(test)]
    fn reverts(&self) -> u64 {
        self.reverts.load(Ordering::SeqCst)
    }
}
