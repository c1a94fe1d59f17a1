//! Infrastructure layer: OS and network adapters.
//!
//! The CEC adapter and the command channel are portable; the uinput virtual
//! keyboard exists only on Linux and is selected at compile time.

pub mod cec;
pub mod command_channel;

#[cfg(target_os = "linux")]
pub mod keyboard;

pub use command_channel::run_command_channel;
