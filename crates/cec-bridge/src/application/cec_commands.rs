//! CEC command executor: maps textual commands onto adapter operations.
//!
//! This is the `"cec"` half of the command protocol. Every command resolves
//! to exactly one adapter call; outcomes are reported as a `(success,
//! message)` pair and never as a panic or error return. Adapter failures,
//! unparseable addresses, and unknown commands all surface the same way, so
//! a command-channel session is never disturbed by a bad request.

use thiserror::Error;
use tracing::warn;

/// Error type for CEC adapter operations.
#[derive(Debug, Error)]
pub enum CecError {
    /// The adapter accepted the call but reported that the bus operation
    /// failed.
    #[error("adapter command failed: {0}")]
    Command(String),

    /// The adapter connection is not open.
    #[error("adapter not connected")]
    NotConnected,
}

/// The live CEC bus connection, as seen by the executor.
///
/// One implementation exists per process (plus a recording mock for tests).
/// Implementations own their internal synchronization: every method may be
/// called concurrently with the adapter's own asynchronous key-press
/// delivery.
pub trait CecAdapter: Send + Sync {
    /// Sends a raw frame on the bus.
    fn transmit(&self, frame: &[u8]) -> Result<(), CecError>;

    /// Sends a power-on request to the device at `address`.
    fn power_on(&self, address: u8) -> Result<(), CecError>;

    /// Sends a standby request to the device at `address`.
    fn standby(&self, address: u8) -> Result<(), CecError>;

    /// Makes `physical_address` the active source path.
    fn set_active_path(&self, physical_address: u16) -> Result<(), CecError>;

    /// Declares this device the active source.
    fn set_active_source(&self) -> Result<(), CecError>;

    /// Declares this device inactive.
    fn set_inactive_view(&self) -> Result<(), CecError>;

    /// Sends a volume-up press to the audio system.
    fn volume_up(&self) -> Result<(), CecError>;

    /// Sends a volume-down press to the audio system.
    fn volume_down(&self) -> Result<(), CecError>;

    /// Toggles the audio system's mute state.
    fn toggle_mute(&self) -> Result<(), CecError>;
}

/// The CEC "invalid physical address" sentinel (`F.F.F.F`). Valid active-path
/// targets must be strictly below it.
pub const INVALID_PHYSICAL_ADDRESS: u16 = 0xFFFF;

/// Executes one CEC command against the adapter.
///
/// Returns `(success, message)`; never fails outright. Commands with an
/// unparseable argument fail without touching the adapter.
pub fn execute(adapter: &dyn CecAdapter, command: &str, args: &str) -> (bool, String) {
    match command {
        "transmit" => match parse_frame(args) {
            Some(frame) => report(
                adapter.transmit(&frame),
                "Raw command transmitted",
                "Failed to transmit raw command",
            ),
            None => {
                warn!("transmit frame '{args}' is not a colon-separated hex byte sequence");
                (false, "Failed to transmit raw command".to_string())
            }
        },

        "on" => match parse_logical_address(args) {
            Some(address) => report(
                adapter.power_on(address),
                "Device powered on",
                "Failed to power device",
            ),
            None => {
                warn!("power-on address '{args}' is not a hex byte");
                (false, "Failed to power device".to_string())
            }
        },

        "standby" => match parse_logical_address(args) {
            Some(address) => report(
                adapter.standby(address),
                "Device placed in standby",
                "Failed to standby device",
            ),
            None => {
                warn!("standby address '{args}' is not a hex byte");
                (false, "Failed to standby device".to_string())
            }
        },

        "set_addr_active" => match parse_physical_address(args) {
            Some(address) => report(
                adapter.set_active_path(address),
                "Active path set",
                "Failed to set active path",
            ),
            None => {
                warn!("active-path address '{args}' is not a valid physical address");
                (false, "Failed to set active path".to_string())
            }
        },

        "activate" => report(
            adapter.set_active_source(),
            "Device set as active source",
            "Failed to set active source",
        ),

        "deactivate" => report(
            adapter.set_inactive_view(),
            "Device marked inactive",
            "Failed to mark device inactive",
        ),

        "volup" => report(
            adapter.volume_up(),
            "Volume up sent",
            "Failed to change volume",
        ),

        "voldown" => report(
            adapter.volume_down(),
            "Volume down sent",
            "Failed to change volume",
        ),

        "mute" => report(
            adapter.toggle_mute(),
            "Mute toggled",
            "Failed to toggle mute",
        ),

        other => {
            warn!("rejected unknown CEC command '{other}'");
            (false, "invalid CEC command".to_string())
        }
    }
}

/// Collapses an adapter result into the protocol's `(success, message)` pair.
fn report(result: Result<(), CecError>, ok_msg: &str, fail_msg: &str) -> (bool, String) {
    match result {
        Ok(()) => (true, ok_msg.to_string()),
        Err(e) => {
            warn!("{fail_msg}: {e}");
            (false, fail_msg.to_string())
        }
    }
}

/// Parses a hex logical-address byte (`"04"` → 4). Any value 0–255 parses;
/// range policing beyond that is the adapter's concern.
fn parse_logical_address(args: &str) -> Option<u8> {
    u8::from_str_radix(args.trim(), 16).ok()
}

/// Parses a hex physical address, rejecting the invalid-address sentinel and
/// anything that does not fit in 16 bits.
fn parse_physical_address(args: &str) -> Option<u16> {
    let address = u16::from_str_radix(args.trim(), 16).ok()?;
    (address < INVALID_PHYSICAL_ADDRESS).then_some(address)
}

/// Parses a colon-separated hex byte frame (`"40:04"` → `[0x40, 0x04]`).
fn parse_frame(args: &str) -> Option<Vec<u8>> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .split(':')
        .map(|byte| u8::from_str_radix(byte, 16).ok())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
