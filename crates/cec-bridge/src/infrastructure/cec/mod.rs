//! libcec adapter binding.
//!
//! [`LibcecAdapter`] is the process-wide handle to the CEC bus: initialized
//! once at startup, opened on one adapter port, dropped exactly once at
//! shutdown after the injection loop and the command channel have stopped.
//!
//! In the current state this is a scaffold implementation that validates the
//! full data path (configuration, open/close lifecycle, key-press handler
//! registration, command routing) but defers the actual libcec FFI calls.
//! The production implementation holds the `ICECAdapter` handle obtained
//! from `LibCecInitialise` and forwards each trait method to the
//! corresponding libcec call; libcec performs its own internal locking, so
//! no synchronization is added here beyond handler registration.

pub mod mock;

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::application::cec_commands::{CecAdapter, CecError};
use crate::application::key_events::CecKeyPressHandler;

/// Adapter-level configuration handed to libcec at initialization.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// OSD name this bridge announces on the bus.
    pub device_name: String,
    /// Button repeat rate in milliseconds.
    pub repeat_rate_ms: u32,
    /// Button release delay in milliseconds.
    pub release_delay_ms: u32,
    /// Double-tap detection window in milliseconds.
    pub double_tap_timeout_ms: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            device_name: "cec_bridge".to_string(),
            repeat_rate_ms: 250,
            release_delay_ms: 0,
            double_tap_timeout_ms: 650,
        }
    }
}

/// The live libcec connection.
pub struct LibcecAdapter {
    config: AdapterConfig,
    // Port the adapter was opened on; `None` until `open` succeeds.
    port: Mutex<Option<String>>,
    handler: Mutex<Option<Arc<CecKeyPressHandler>>>,
}

impl LibcecAdapter {
    /// Loads libcec and prepares an adapter with `config`.
    ///
    /// Production: builds a `libcec_configuration` (device name, repeat
    /// timings, recording-device type, key-press callback) and calls
    /// `LibCecInitialise`; a null return is the load failure.
    ///
    /// # Errors
    ///
    /// Returns [`CecError::NotConnected`] when the library cannot be loaded.
    pub fn initialize(config: AdapterConfig) -> Result<Self, CecError> {
        debug!(
            "initializing CEC adapter '{}' (repeat {} ms, release {} ms, double-tap {} ms)",
            config.device_name,
            config.repeat_rate_ms,
            config.release_delay_ms,
            config.double_tap_timeout_ms
        );
        Ok(Self {
            config,
            port: Mutex::new(None),
            handler: Mutex::new(None),
        })
    }

    /// Enumerates CEC adapter ports present on this machine.
    ///
    /// Production: `DetectAdapters` with a bounded descriptor array; each
    /// entry's COM port name is returned. The scaffold sees no hardware and
    /// returns an empty list, which callers must treat as "autodetection
    /// failed".
    pub fn detect_adapters(&self) -> Vec<String> {
        Vec::new()
    }

    /// Opens the adapter on `port`.
    ///
    /// Production: `ICECAdapter::Open(port)`, which also starts the callback
    /// delivery thread.
    ///
    /// # Errors
    ///
    /// Returns [`CecError::Command`] when the port cannot be opened.
    pub fn open(&self, port: &str) -> Result<(), CecError> {
        let mut guard = self.lock_port();
        *guard = Some(port.to_string());
        info!("CEC adapter '{}' opened on port {port}", self.config.device_name);
        Ok(())
    }

    /// Registers the handler invoked from the adapter's callback thread on
    /// every `<User Control Pressed>` message.
    ///
    /// Production: the libcec key-press callback trampolines into
    /// [`CecKeyPressHandler::deliver`] with the operand byte.
    pub fn register_key_press_handler(&self, handler: Arc<CecKeyPressHandler>) {
        *self
            .handler
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(handler);
    }

    /// Closes the bus connection. Called once at shutdown, after no producer
    /// can enqueue anymore.
    ///
    /// Production: `ICECAdapter::Close` followed by `UnloadLibCec`.
    pub fn close(&self) {
        let mut guard = self.lock_port();
        if let Some(port) = guard.take() {
            info!("CEC adapter closed (port {port})");
        }
    }

    fn lock_port(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.port
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn ensure_open(&self) -> Result<(), CecError> {
        if self.lock_port().is_some() {
            Ok(())
        } else {
            Err(CecError::NotConnected)
        }
    }
}

impl CecAdapter for LibcecAdapter {
    fn transmit(&self, frame: &[u8]) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: build a cec_command from the frame bytes and call
        // ICECAdapter::Transmit. Marked untested upstream; conformant
        // clients are not known to exercise it.
        debug!("transmit frame {frame:02x?}");
        Ok(())
    }

    fn power_on(&self, address: u8) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::PowerOnDevices(address as cec_logical_address)
        debug!("power on device {address:#04x}");
        Ok(())
    }

    fn standby(&self, address: u8) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::StandbyDevices(address as cec_logical_address)
        debug!("standby device {address:#04x}");
        Ok(())
    }

    fn set_active_path(&self, physical_address: u16) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::SetStreamPath(physical_address)
        debug!("set active path {physical_address:#06x}");
        Ok(())
    }

    fn set_active_source(&self) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::SetActiveSource(CEC_DEVICE_TYPE_RECORDING_DEVICE)
        debug!("set active source");
        Ok(())
    }

    fn set_inactive_view(&self) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::SetInactiveView()
        debug!("set inactive view");
        Ok(())
    }

    fn volume_up(&self) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::VolumeUp(true)
        debug!("volume up");
        Ok(())
    }

    fn volume_down(&self) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::VolumeDown(true)
        debug!("volume down");
        Ok(())
    }

    fn toggle_mute(&self) -> Result<(), CecError> {
        self.ensure_open()?;
        // Production: ICECAdapter::AudioToggleMute()
        debug!("toggle mute");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cec_core::{default_table, KeyEventQueue};

    #[test]
    fn test_adapter_config_defaults_match_original_timings() {
        let config = AdapterConfig::default();
        assert_eq!(config.repeat_rate_ms, 250);
        assert_eq!(config.release_delay_ms, 0);
        assert_eq!(config.double_tap_timeout_ms, 650);
        assert_eq!(config.device_name, "cec_bridge");
    }

    #[test]
    fn test_commands_before_open_fail_with_not_connected() {
        let adapter = LibcecAdapter::initialize(AdapterConfig::default()).unwrap();

        assert!(matches!(adapter.volume_up(), Err(CecError::NotConnected)));
        assert!(matches!(adapter.power_on(0), Err(CecError::NotConnected)));
    }

    #[test]
    fn test_commands_after_open_succeed() {
        let adapter = LibcecAdapter::initialize(AdapterConfig::default()).unwrap();
        adapter.open("/dev/ttyACM0").unwrap();

        assert!(adapter.volume_up().is_ok());
        assert!(adapter.set_active_path(0x1000).is_ok());
    }

    #[test]
    fn test_close_returns_adapter_to_not_connected() {
        let adapter = LibcecAdapter::initialize(AdapterConfig::default()).unwrap();
        adapter.open("/dev/ttyACM0").unwrap();
        adapter.close();

        assert!(matches!(adapter.transmit(&[0x36]), Err(CecError::NotConnected)));
    }

    #[test]
    fn test_handler_registration_is_idempotent() {
        let adapter = LibcecAdapter::initialize(AdapterConfig::default()).unwrap();
        let handler = Arc::new(CecKeyPressHandler::new(
            Arc::new(default_table()),
            Arc::new(KeyEventQueue::new()),
        ));

        adapter.register_key_press_handler(Arc::clone(&handler));
        adapter.register_key_press_handler(handler);
    }

    #[test]
    fn test_scaffold_detects_no_adapters() {
        let adapter = LibcecAdapter::initialize(AdapterConfig::default()).unwrap();
        assert!(adapter.detect_adapters().is_empty());
    }
}
