//! Domain layer: configuration schema and resolved runtime settings.

pub mod config;

pub use config::{dump_keymap, load_config, BridgeConfig, BridgeFileConfig, ConfigError};
