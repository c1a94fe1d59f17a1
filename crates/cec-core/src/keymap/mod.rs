//! Key translation: CEC remote buttons → injectable keyboard keys.
//!
//! The active [`KeyTranslationTable`] is built once at startup — either the
//! built-in default table or a wholesale replacement from the configuration
//! keymap — and is read-only afterwards. Lookups never fail: a button with no
//! entry is an expected, non-fatal occurrence.

pub mod cec_codes;
pub mod input_keys;

use std::collections::BTreeMap;

use thiserror::Error;

pub use cec_codes::{CecUserControlCode, ALL_CEC_CODES};
pub use input_keys::{InputKeyCode, ALL_INPUT_KEYS};

/// Error type for keymap loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    /// A keymap pair referenced a CEC button name not in the symbol table.
    #[error("invalid keymap pair \"{cec_name}: {key_name}\": unknown CEC control code '{cec_name}'")]
    UnknownCecCode { cec_name: String, key_name: String },

    /// A keymap pair referenced a key name not in the symbol table.
    #[error("invalid keymap pair \"{cec_name}: {key_name}\": unknown input key '{key_name}'")]
    UnknownInputKey { cec_name: String, key_name: String },
}

/// Mapping from CEC user control codes to injectable key codes.
///
/// Each control code maps to at most one key; several control codes may map
/// to the same key. Entries are kept in ascending control-code order so
/// [`dump`](Self::dump) output is canonical and round-trips through
/// [`load`](Self::load).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTranslationTable {
    entries: BTreeMap<CecUserControlCode, InputKeyCode>,
}

impl KeyTranslationTable {
    /// Builds a table from resolved pairs. Later pairs overwrite earlier ones
    /// with the same control code.
    pub fn new(pairs: impl IntoIterator<Item = (CecUserControlCode, InputKeyCode)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Builds a table from symbolic name pairs, replacing any previous table
    /// wholesale.
    ///
    /// Both names of every pair must resolve via the fixed symbol tables
    /// (case-sensitive exact match). The load is all-or-nothing: the first
    /// unresolvable pair rejects the entire table.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError`] naming the offending pair.
    pub fn load(pairs: &[(String, String)]) -> Result<Self, KeymapError> {
        let mut entries = BTreeMap::new();
        for (cec_name, key_name) in pairs {
            let code = CecUserControlCode::from_name(cec_name).ok_or_else(|| {
                KeymapError::UnknownCecCode {
                    cec_name: cec_name.clone(),
                    key_name: key_name.clone(),
                }
            })?;
            let key = InputKeyCode::from_name(key_name).ok_or_else(|| {
                KeymapError::UnknownInputKey {
                    cec_name: cec_name.clone(),
                    key_name: key_name.clone(),
                }
            })?;
            entries.insert(code, key);
        }
        Ok(Self { entries })
    }

    /// Looks up the key mapped to `code`, or `None` when the button has no
    /// entry.
    pub fn translate(&self, code: CecUserControlCode) -> Option<InputKeyCode> {
        self.entries.get(&code).copied()
    }

    /// Produces a textual snapshot of the table in ascending control-code
    /// order, suitable for round-tripping through [`load`](Self::load).
    pub fn dump(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(code, key)| (code.name().to_string(), key.name().to_string()))
            .collect()
    }

    /// Number of mapped control codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no control code is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The built-in keymap used when the configuration supplies none.
///
/// Covers navigation, digits, transport, and audio buttons of a typical TV
/// remote.
pub fn default_table() -> KeyTranslationTable {
    use CecUserControlCode as Cec;
    use InputKeyCode as Key;

    KeyTranslationTable::new([
        (Cec::Select, Key::Enter),
        (Cec::Up, Key::Up),
        (Cec::Down, Key::Down),
        (Cec::Left, Key::Left),
        (Cec::Right, Key::Right),
        (Cec::RootMenu, Key::Menu),
        (Cec::Exit, Key::Esc),
        (Cec::Number0, Key::Num0),
        (Cec::Number1, Key::Num1),
        (Cec::Number2, Key::Num2),
        (Cec::Number3, Key::Num3),
        (Cec::Number4, Key::Num4),
        (Cec::Number5, Key::Num5),
        (Cec::Number6, Key::Num6),
        (Cec::Number7, Key::Num7),
        (Cec::Number8, Key::Num8),
        (Cec::Number9, Key::Num9),
        (Cec::Dot, Key::Dot),
        (Cec::Enter, Key::Enter),
        (Cec::Clear, Key::Backspace),
        (Cec::ChannelUp, Key::ChannelUp),
        (Cec::ChannelDown, Key::ChannelDown),
        (Cec::PreviousChannel, Key::Previous),
        (Cec::DisplayInformation, Key::Info),
        (Cec::PageUp, Key::PageUp),
        (Cec::PageDown, Key::PageDown),
        (Cec::Power, Key::Power),
        (Cec::VolumeUp, Key::VolumeUp),
        (Cec::VolumeDown, Key::VolumeDown),
        (Cec::Mute, Key::Mute),
        (Cec::Play, Key::Play),
        (Cec::Stop, Key::StopCd),
        (Cec::Pause, Key::PlayPause),
        (Cec::Record, Key::Record),
        (Cec::Rewind, Key::Rewind),
        (Cec::FastForward, Key::FastForward),
        (Cec::Eject, Key::EjectCd),
        (Cec::Forward, Key::NextSong),
        (Cec::Backward, Key::PreviousSong),
        (Cec::F1Blue, Key::Blue),
        (Cec::F2Red, Key::Red),
        (Cec::F3Green, Key::Green),
        (Cec::F4Yellow, Key::Yellow),
    ])
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn as_string_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(c, k)| (c.to_string(), k.to_string()))
            .collect()
    }

    #[test]
    fn test_translate_returns_mapped_key() {
        let table = default_table();
        assert_eq!(
            table.translate(CecUserControlCode::Select),
            Some(InputKeyCode::Enter)
        );
        assert_eq!(
            table.translate(CecUserControlCode::VolumeUp),
            Some(InputKeyCode::VolumeUp)
        );
    }

    #[test]
    fn test_translate_returns_none_for_unmapped_code() {
        // SoundSelect is deliberately absent from the default table.
        let table = default_table();
        assert_eq!(table.translate(CecUserControlCode::SoundSelect), None);
    }

    #[test]
    fn test_load_resolves_valid_pairs() {
        let table =
            KeyTranslationTable::load(&as_string_pairs(&[("select", "KEY_ENTER"), ("up", "KEY_UP")]))
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.translate(CecUserControlCode::Up),
            Some(InputKeyCode::Up)
        );
    }

    #[test]
    fn test_load_rejects_unknown_cec_name() {
        let result = KeyTranslationTable::load(&as_string_pairs(&[
            ("select", "KEY_ENTER"),
            ("warp_drive", "KEY_UP"),
        ]));
        assert_eq!(
            result,
            Err(KeymapError::UnknownCecCode {
                cec_name: "warp_drive".to_string(),
                key_name: "KEY_UP".to_string(),
            })
        );
    }

    #[test]
    fn test_load_rejects_unknown_key_name() {
        let result =
            KeyTranslationTable::load(&as_string_pairs(&[("select", "KEY_HYPERSPACE")]));
        assert_eq!(
            result,
            Err(KeymapError::UnknownInputKey {
                cec_name: "select".to_string(),
                key_name: "KEY_HYPERSPACE".to_string(),
            })
        );
    }

    #[test]
    fn test_load_is_all_or_nothing() {
        // One bad pair poisons the whole load — no partial table survives.
        let result = KeyTranslationTable::load(&as_string_pairs(&[
            ("select", "KEY_ENTER"),
            ("up", "KEY_UP"),
            ("down", "KEY_BOGUS"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_is_case_sensitive() {
        assert!(KeyTranslationTable::load(&as_string_pairs(&[("Select", "KEY_ENTER")])).is_err());
        assert!(KeyTranslationTable::load(&as_string_pairs(&[("select", "key_enter")])).is_err());
    }

    #[test]
    fn test_duplicate_cec_code_keeps_last_entry() {
        let table = KeyTranslationTable::load(&as_string_pairs(&[
            ("select", "KEY_ENTER"),
            ("select", "KEY_OK"),
        ]))
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.translate(CecUserControlCode::Select),
            Some(InputKeyCode::Ok)
        );
    }

    #[test]
    fn test_two_cec_codes_may_map_to_same_key() {
        let table = KeyTranslationTable::load(&as_string_pairs(&[
            ("select", "KEY_ENTER"),
            ("enter", "KEY_ENTER"),
        ]))
        .unwrap();
        assert_eq!(
            table.translate(CecUserControlCode::Select),
            table.translate(CecUserControlCode::Enter)
        );
    }

    #[test]
    fn test_dump_is_ascending_by_cec_code() {
        let dump = default_table().dump();
        let codes: Vec<u8> = dump
            .iter()
            .map(|(name, _)| CecUserControlCode::from_name(name).unwrap().code())
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_dump_load_round_trip_preserves_all_translations() {
        let original = default_table();
        let reloaded = KeyTranslationTable::load(&original.dump()).unwrap();

        assert_eq!(original, reloaded);
        for &code in ALL_CEC_CODES {
            assert_eq!(original.translate(code), reloaded.translate(code));
        }
    }

    #[test]
    fn test_empty_load_produces_empty_table() {
        let table = KeyTranslationTable::load(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.translate(CecUserControlCode::Select), None);
    }
}
