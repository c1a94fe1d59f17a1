//! TOML-based bridge configuration.
//!
//! The config file carries the CEC button timing parameters and an optional
//! `[keymap]` table replacing the built-in translation table wholesale:
//!
//! ```toml
//! repeat_rate_ms = 250
//! release_delay_ms = 0
//! double_tap_timeout_ms = 650
//!
//! [keymap]
//! select = "KEY_ENTER"
//! volume_up = "KEY_VOLUMEUP"
//! ```
//!
//! A keymap pair whose CEC-code name or key name does not resolve is a fatal
//! configuration error: the whole load is rejected and the process exits
//! before entering the main loop, printing the offending pair. A missing
//! `[keymap]` section only means the defaults stay active.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use cec_core::{default_table, KeyTranslationTable, KeymapError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The keymap referenced an unknown CEC-code or key name.
    #[error("config file {path} contains an invalid keymap pair: {source}")]
    Keymap {
        path: PathBuf,
        #[source]
        source: KeymapError,
    },
}

// ── File schema ───────────────────────────────────────────────────────────────

/// On-disk configuration schema.
///
/// Every field is optional; absent fields fall back to the defaults the
/// bridge was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeFileConfig {
    /// Button repeat rate in milliseconds.
    #[serde(default = "default_repeat_rate_ms")]
    pub repeat_rate_ms: u32,

    /// Button release delay in milliseconds.
    #[serde(default = "default_release_delay_ms")]
    pub release_delay_ms: u32,

    /// Double-tap detection window in milliseconds.
    #[serde(default = "default_double_tap_timeout_ms")]
    pub double_tap_timeout_ms: u32,

    /// Wholesale keymap replacement: CEC-code name → key name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keymap: Option<BTreeMap<String, String>>,
}

fn default_repeat_rate_ms() -> u32 {
    250
}
fn default_release_delay_ms() -> u32 {
    0
}
fn default_double_tap_timeout_ms() -> u32 {
    650
}

impl Default for BridgeFileConfig {
    fn default() -> Self {
        Self {
            repeat_rate_ms: default_repeat_rate_ms(),
            release_delay_ms: default_release_delay_ms(),
            double_tap_timeout_ms: default_double_tap_timeout_ms(),
            keymap: None,
        }
    }
}

// ── Resolved runtime configuration ────────────────────────────────────────────

/// Configuration after the keymap has been resolved against the symbol
/// tables. Read-only once the bridge is running.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub repeat_rate_ms: u32,
    pub release_delay_ms: u32,
    pub double_tap_timeout_ms: u32,
    pub table: KeyTranslationTable,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            repeat_rate_ms: default_repeat_rate_ms(),
            release_delay_ms: default_release_delay_ms(),
            double_tap_timeout_ms: default_double_tap_timeout_ms(),
            table: default_table(),
        }
    }
}

/// Loads and resolves the configuration at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read (a requested
/// config file that is missing is fatal), [`ConfigError::Parse`] for
/// malformed TOML, and [`ConfigError::Keymap`] when any keymap pair fails to
/// resolve — the whole load is rejected, never applied partially.
pub fn load_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: BridgeFileConfig = toml::from_str(&content)?;
    resolve(file, path)
}

/// Resolves a parsed file schema into runtime configuration.
fn resolve(file: BridgeFileConfig, path: &Path) -> Result<BridgeConfig, ConfigError> {
    let table = match file.keymap {
        Some(entries) => {
            let pairs: Vec<(String, String)> = entries.into_iter().collect();
            KeyTranslationTable::load(&pairs).map_err(|source| ConfigError::Keymap {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            warn!("keymap was not found in '{}', using defaults instead", path.display());
            default_table()
        }
    };

    Ok(BridgeConfig {
        repeat_rate_ms: file.repeat_rate_ms,
        release_delay_ms: file.release_delay_ms,
        double_tap_timeout_ms: file.double_tap_timeout_ms,
        table,
    })
}

/// Renders the active keymap as a TOML document suitable for feeding back
/// through [`load_config`]. Entries are keyed by CEC-code name, so the TOML
/// map sorts them by name; the table itself round-trips exactly.
pub fn dump_keymap(table: &KeyTranslationTable) -> Result<String, toml::ser::Error> {
    let keymap: BTreeMap<String, String> = table.dump().into_iter().collect();
    let file = BridgeFileConfig {
        keymap: Some(keymap),
        ..BridgeFileConfig::default()
    };
    toml::to_string_pretty(&file)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
