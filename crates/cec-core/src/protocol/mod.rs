//! Command-channel protocol types.

pub mod messages;

pub use messages::{CommandRequest, CommandResponse};
