//! Recording CEC adapter for tests.
//!
//! Captures every call with its arguments instead of touching a bus, and can
//! be configured to fail every command so error paths are exercisable.

use std::sync::Mutex;

use crate::application::cec_commands::{CecAdapter, CecError};

/// One recorded adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCall {
    Transmit(Vec<u8>),
    PowerOn(u8),
    Standby(u8),
    SetActivePath(u16),
    SetActiveSource,
    SetInactiveView,
    VolumeUp,
    VolumeDown,
    ToggleMute,
}

/// CEC adapter that records calls; optionally fails all of them.
#[derive(Debug, Default)]
pub struct RecordingCecAdapter {
    calls: Mutex<Vec<AdapterCall>>,
    fail_all: bool,
}

impl RecordingCecAdapter {
    /// Creates an adapter that accepts every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that reports failure for every command. Calls are
    /// still recorded.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_all: true,
        }
    }

    /// Returns a snapshot of all recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<AdapterCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AdapterCall) -> Result<(), CecError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_all {
            Err(CecError::Command("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CecAdapter for RecordingCecAdapter {
    fn transmit(&self, frame: &[u8]) -> Result<(), CecError> {
        self.record(AdapterCall::Transmit(frame.to_vec()))
    }

    fn power_on(&self, address: u8) -> Result<(), CecError> {
        self.record(AdapterCall::PowerOn(address))
    }

    fn standby(&self, address: u8) -> Result<(), CecError> {
        self.record(AdapterCall::Standby(address))
    }

    fn set_active_path(&self, physical_address: u16) -> Result<(), CecError> {
        self.record(AdapterCall::SetActivePath(physical_address))
    }

    fn set_active_source(&self) -> Result<(), CecError> {
        self.record(AdapterCall::SetActiveSource)
    }

    fn set_inactive_view(&self) -> Result<(), CecError> {
        self.record(AdapterCall::SetInactiveView)
    }

    fn volume_up(&self) -> Result<(), CecError> {
        self.record(AdapterCall::VolumeUp)
    }

    fn volume_down(&self) -> Result<(), CecError> {
        self.record(AdapterCall::VolumeDown)
    }

    fn toggle_mute(&self) -> Result<(), CecError> {
        self.record(AdapterCall::ToggleMute)
    }
}
