//! Key-press delivery from the CEC adapter into the event queue.
//!
//! The adapter invokes [`CecKeyPressHandler::deliver`] from its own callback
//! thread whenever a remote button press arrives on the bus. Delivery only
//! translates and enqueues — the synthesized key reaches the output device
//! later, on the injection loop. An unmapped button is logged and dropped;
//! nothing else observes it.

use std::sync::Arc;

use tracing::{debug, info};

use cec_core::{CecUserControlCode, KeyEventQueue, KeyTranslationTable};

/// Receives remote button presses and funnels the mapped ones into the queue.
pub struct CecKeyPressHandler {
    table: Arc<KeyTranslationTable>,
    queue: Arc<KeyEventQueue>,
}

impl CecKeyPressHandler {
    /// Creates a handler over the active translation table and the shared
    /// event queue.
    pub fn new(table: Arc<KeyTranslationTable>, queue: Arc<KeyEventQueue>) -> Self {
        Self { table, queue }
    }

    /// Handles one raw `<User Control Pressed>` operand from the adapter.
    ///
    /// Safe to call from any thread; the queue provides the serialization.
    pub fn deliver(&self, raw_code: u8) {
        let Some(code) = CecUserControlCode::from_code(raw_code) else {
            info!("unmapped key pressed: CEC code {raw_code:#04x}");
            return;
        };

        match self.table.translate(code) {
            Some(key) => {
                debug!("CEC '{}' -> {}", code.name(), key.name());
                self.queue.push(key);
            }
            None => {
                info!("unmapped key pressed: CEC code '{}'", code.name());
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
