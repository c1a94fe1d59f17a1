//! cec-bridge library entry point.
//!
//! Re-exports all public modules so that the binary entry point in `main.rs`
//! and the tests share the same module tree.
//!
//! # What does cec-bridge do?
//!
//! The bridge sits between a TV remote and a Linux machine plugged into the
//! same HDMI chain. Button presses arrive from the CEC adapter, are
//! translated through a configurable keymap, and are replayed as synthetic
//! keyboard input through a uinput virtual device — so the machine behaves
//! as if the remote were a keyboard.
//!
//! A JSON-over-WebSocket command channel additionally lets remote clients:
//!
//! 1. Inject synthetic key presses directly (`{"target":"key", ...}`).
//! 2. Issue CEC bus commands — power, volume, active source, raw transmit
//!    (`{"target":"cec", ...}`).
//!
//! Both event sources funnel key injections through one mutex-guarded FIFO
//! drained by a single injection loop, so injections are serialized in
//! arrival order no matter which thread produced them.

/// Application layer: dispatcher, CEC command executor, injection loop.
pub mod application;

/// Domain layer: configuration.
pub mod domain;

/// Infrastructure layer: CEC adapter, uinput keyboard, command channel.
pub mod infrastructure;
