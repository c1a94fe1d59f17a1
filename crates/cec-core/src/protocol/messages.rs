//! JSON message types for the command-channel protocol.
//!
//! Remote clients speak a small request/response protocol over WebSocket
//! text frames. One request yields exactly one response on the same
//! connection.
//!
//! ```json
//! {"target":"cec","command":"on","args":"04"}
//! {"success":true,"message":"Device powered on"}
//! ```
//!
//! `target` and `command` stay plain strings rather than serde-tagged enums:
//! an unknown target must reach the dispatcher and come back as a structured
//! failure response, not as a deserialization error.

use serde::{Deserialize, Serialize};

/// One inbound command request.
///
/// `args` may be omitted by the client and defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Routing target: `"cec"` for bus commands, `"key"` for direct key
    /// injection. Validated by the dispatcher, not by serde.
    pub target: String,

    /// Command name within the target's namespace.
    pub command: String,

    /// Command argument string; meaning depends on the command.
    #[serde(default)]
    pub args: String,
}

/// One outbound command response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// `true` when the command was accepted and executed.
    pub success: bool,

    /// Human-readable outcome description.
    pub message: String,
}

impl CommandResponse {
    /// Builds a success response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Builds a failure response.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
