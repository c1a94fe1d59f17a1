//! Command dispatcher: one raw request in, one structured response out.
//!
//! The dispatcher is the validation and routing point for everything that
//! arrives on the command channel. It holds no per-request state — only
//! shared references to the event queue and the adapter — so any number of
//! session tasks may call [`Dispatcher::handle`] concurrently. Each request
//! is handled exactly once, independently, with no retries.

use std::sync::Arc;

use tracing::debug;

use cec_core::{CommandRequest, CommandResponse, InputKeyCode, KeyEventQueue};

use crate::application::cec_commands::{self, CecAdapter};

/// Routes parsed command requests to key injection or the CEC executor.
///
/// Key commands resolve through the fixed key symbol table — not the CEC
/// translation table, which only serves adapter-delivered button presses.
pub struct Dispatcher {
    queue: Arc<KeyEventQueue>,
    adapter: Arc<dyn CecAdapter>,
}

impl Dispatcher {
    /// Creates a dispatcher over the shared bridge state.
    pub fn new(queue: Arc<KeyEventQueue>, adapter: Arc<dyn CecAdapter>) -> Self {
        Self { queue, adapter }
    }

    /// Handles one raw request text frame.
    ///
    /// Every failure mode — malformed JSON, missing fields, unknown target
    /// or command, adapter errors — comes back as a failure *response*; the
    /// calling session is never disturbed.
    pub fn handle(&self, raw: &str) -> CommandResponse {
        let request: CommandRequest = match serde_json::from_str(raw) {
            Ok(req) => req,
            Err(e) => {
                debug!("rejected unparseable request: {e}");
                return CommandResponse::fail(e.to_string());
            }
        };

        if request.target.is_empty() || request.command.is_empty() {
            return CommandResponse::fail("target and command are both required parameters");
        }

        match request.target.as_str() {
            "key" => self.handle_key(&request.command),
            "cec" => {
                let (success, message) =
                    cec_commands::execute(self.adapter.as_ref(), &request.command, &request.args);
                CommandResponse { success, message }
            }
            other => {
                debug!("rejected request with unknown target '{other}'");
                CommandResponse::fail("Unrecognised command type")
            }
        }
    }

    /// Resolves a key-injection command and enqueues the pending event.
    fn handle_key(&self, command: &str) -> CommandResponse {
        match InputKeyCode::from_name(command) {
            Some(key) => {
                debug!("queueing '{}' from command channel", key.name());
                self.queue.push(key);
                CommandResponse::ok("key code received")
            }
            None => {
                debug!("rejected unknown key command '{command}'");
                CommandResponse::fail("Unrecognised key command")
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
