//! The injection loop: sole consumer of the key-event queue.
//!
//! Drains pending events on a short fixed cadence and forwards each one
//! synchronously to the output device. An injector failure is fatal — the
//! key-injection channel is the bridge's entire reason for running — so the
//! loop returns the error and the process exits.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use thiserror::Error;
use tokio::time::interval;
use tracing::{debug, info};

use cec_core::{InputKeyCode, KeyEventQueue};

/// How often the loop polls the queue when idle.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Error type for synthetic key injection.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// Writing to the output device failed.
    #[error("output device write failed: {0}")]
    DeviceWrite(#[from] std::io::Error),
}

/// Synthetic keyboard output, as seen by the injection loop.
///
/// The production implementation is the uinput virtual keyboard in the
/// infrastructure layer; tests substitute a recording implementation.
pub trait KeyInjector: Send {
    /// Injects one full key press (press then release).
    fn inject(&mut self, key: InputKeyCode) -> Result<(), InjectionError>;
}

impl<T: KeyInjector + ?Sized> KeyInjector for Box<T> {
    fn inject(&mut self, key: InputKeyCode) -> Result<(), InjectionError> {
        (**self).inject(key)
    }
}

/// Runs the injection loop until `running` clears or the injector fails.
///
/// Polls [`KeyEventQueue::try_pop`] every [`POLL_INTERVAL`]; each drained
/// event is forwarded before the next is popped, so injection order equals
/// queue order.
///
/// # Errors
///
/// Returns the first [`InjectionError`] from the injector. This is fatal to
/// the process.
pub async fn run_injection_loop(
    queue: Arc<KeyEventQueue>,
    mut injector: impl KeyInjector,
    running: Arc<AtomicBool>,
) -> Result<(), InjectionError> {
    let mut ticker = interval(POLL_INTERVAL);

    info!("injection loop started");
    while running.load(Ordering::Relaxed) {
        ticker.tick().await;

        // Drain everything that accumulated during the tick so a burst of
        // presses does not fall behind the poll cadence.
        while let Some(key) = queue.try_pop() {
            debug!("injecting {}", key.name());
            injector.inject(key)?;
        }
    }
    info!("injection loop stopped");

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
