//! # cec-core
//!
//! Shared library for the CEC keyboard bridge: symbol tables for CEC user
//! control codes and Linux input key codes, the key translation table, the
//! command-channel protocol types, and the pending key-event queue.
//!
//! This crate is used by the bridge daemon and its tests. It has zero
//! dependencies on OS APIs, the CEC adapter, or network sockets.
//!
//! # Architecture overview
//!
//! The bridge turns remote-control button presses arriving over HDMI-CEC into
//! synthetic keyboard events, and accepts the same injections plus CEC bus
//! commands over a small JSON protocol. This crate is the shared foundation:
//!
//! - **`keymap`** – The symbolic identities on both sides of the bridge
//!   (CEC user control codes, Linux `KEY_*` codes) and the translation
//!   table between them.
//!
//! - **`protocol`** – The JSON request/response types spoken on the
//!   command channel.
//!
//! - **`queue`** – The mutex-guarded FIFO through which every producer
//!   (adapter callback, command sessions) reaches the single injection
//!   loop.

pub mod keymap;
pub mod protocol;
pub mod queue;

// Re-export the most-used types at the crate root so callers can write
// `cec_core::KeyTranslationTable` instead of the full module path.
pub use keymap::{
    default_table, CecUserControlCode, InputKeyCode, KeyTranslationTable, KeymapError,
    ALL_CEC_CODES, ALL_INPUT_KEYS,
};
pub use protocol::{CommandRequest, CommandResponse};
pub use queue::KeyEventQueue;
