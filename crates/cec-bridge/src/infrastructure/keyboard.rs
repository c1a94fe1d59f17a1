//! Virtual keyboard output via Linux uinput.
//!
//! [`UinputKeyboard`] creates one uinput device at startup with every
//! injectable key registered, and emits a press/release pair per injected
//! event — the same sequence a physical keyboard produces. The `evdev`
//! crate manages the `/dev/uinput` node; if the node is absent or the
//! process lacks permission, creation fails and startup aborts.

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key};

use cec_core::{InputKeyCode, ALL_INPUT_KEYS};

use crate::application::injection::{InjectionError, KeyInjector};

/// Key press event value.
const PRESS: i32 = 1;
/// Key release event value.
const RELEASE: i32 = 0;

/// A uinput virtual keyboard owning the injection end of the bridge.
pub struct UinputKeyboard {
    device: VirtualDevice,
}

impl UinputKeyboard {
    /// Creates the virtual keyboard, registering every key in the symbol
    /// table so any mapped or protocol-requested key is injectable.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when `/dev/uinput` cannot be opened
    /// or the device cannot be set up. This is fatal at startup.
    pub fn create(name: &str) -> std::io::Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        for &key in ALL_INPUT_KEYS {
            keys.insert(Key::new(key.code()));
        }

        let device = VirtualDeviceBuilder::new()?
            .name(name)
            .with_keys(&keys)?
            .build()?;

        Ok(Self { device })
    }
}

impl KeyInjector for UinputKeyboard {
    fn inject(&mut self, key: InputKeyCode) -> Result<(), InjectionError> {
        // Press and release are separate emits; `emit` appends the
        // SYN_REPORT frame terminator to each batch.
        self.device.emit(&[key_event(key, PRESS)])?;
        self.device.emit(&[key_event(key, RELEASE)])?;
        Ok(())
    }
}

/// Builds one KEY input event for `key` with the given press/release value.
fn key_event(key: InputKeyCode, value: i32) -> InputEvent {
    InputEvent::new(EventType::KEY, key.code(), value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Device creation requires /dev/uinput and CAP_SYS_ADMIN-ish access, so
    // only the event construction is unit-tested here.

    #[test]
    fn test_key_event_carries_kernel_code_and_value() {
        let press = key_event(InputKeyCode::Enter, PRESS);
        assert_eq!(press.event_type(), EventType::KEY);
        assert_eq!(press.code(), 28);
        assert_eq!(press.value(), PRESS);

        let release = key_event(InputKeyCode::Enter, RELEASE);
        assert_eq!(release.value(), RELEASE);
    }

    #[test]
    fn test_every_symbol_table_key_is_registrable() {
        let mut keys = AttributeSet::<Key>::new();
        for &key in ALL_INPUT_KEYS {
            keys.insert(Key::new(key.code()));
        }
        for &key in ALL_INPUT_KEYS {
            assert!(keys.contains(Key::new(key.code())));
        }
    }
}
