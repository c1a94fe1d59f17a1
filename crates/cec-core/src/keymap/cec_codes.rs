//! CEC user control codes (HDMI-CEC "UI Command" operands).
//!
//! This is the canonical representation of a remote-control button press as
//! delivered by the CEC adapter. Symbolic names are the spellings accepted in
//! the configuration keymap and the `dump` output.
//!
//! Reference: HDMI-CEC 1.4, CEC Table 27 (UI Command Codes).
//!
//! # What is a user control code? (for beginners)
//!
//! When you press a button on a TV remote, the TV forwards the press over the
//! HDMI-CEC bus as a `<User Control Pressed>` message whose single operand
//! identifies the button. The operand values are fixed by the CEC
//! specification:
//!
//! | Button       | Code |
//! |--------------|------|
//! | Select/OK    | 0x00 |
//! | Up           | 0x01 |
//! | Volume Up    | 0x41 |
//! | Play         | 0x44 |
//!
//! The codes identify *buttons*, not characters — what a button does is
//! decided entirely by the receiving device. This bridge decides by looking
//! the code up in a [`KeyTranslationTable`](crate::keymap::KeyTranslationTable).

use serde::{Deserialize, Serialize};

/// CEC user control code — one remote-control button identity.
///
/// The numeric value of each variant is its operand value in the CEC
/// `<User Control Pressed>` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CecUserControlCode {
    // Navigation (0x00–0x0D)
    Select = 0x00,
    Up = 0x01,
    Down = 0x02,
    Left = 0x03,
    Right = 0x04,
    RootMenu = 0x09,
    SetupMenu = 0x0A,
    ContentsMenu = 0x0B,
    FavoriteMenu = 0x0C,
    Exit = 0x0D,

    // Numbers (0x20–0x29)
    Number0 = 0x20,
    Number1 = 0x21,
    Number2 = 0x22,
    Number3 = 0x23,
    Number4 = 0x24,
    Number5 = 0x25,
    Number6 = 0x26,
    Number7 = 0x27,
    Number8 = 0x28,
    Number9 = 0x29,
    Dot = 0x2A,
    Enter = 0x2B,
    Clear = 0x2C,

    // Channel and information (0x30–0x38)
    ChannelUp = 0x30,
    ChannelDown = 0x31,
    PreviousChannel = 0x32,
    SoundSelect = 0x33,
    InputSelect = 0x34,
    DisplayInformation = 0x35,
    Help = 0x36,
    PageUp = 0x37,
    PageDown = 0x38,

    // Power and audio (0x40–0x43)
    Power = 0x40,
    VolumeUp = 0x41,
    VolumeDown = 0x42,
    Mute = 0x43,

    // Transport (0x44–0x4C)
    Play = 0x44,
    Stop = 0x45,
    Pause = 0x46,
    Record = 0x47,
    Rewind = 0x48,
    FastForward = 0x49,
    Eject = 0x4A,
    Forward = 0x4B,
    Backward = 0x4C,

    // Colour function buttons (0x71–0x75)
    F1Blue = 0x71,
    F2Red = 0x72,
    F3Green = 0x73,
    F4Yellow = 0x74,
    F5 = 0x75,
}

/// Every defined control code, in ascending operand order.
///
/// Used for keymap enumeration and the translation benchmark.
pub const ALL_CEC_CODES: &[CecUserControlCode] = &[
    CecUserControlCode::Select,
    CecUserControlCode::Up,
    CecUserControlCode::Down,
    CecUserControlCode::Left,
    CecUserControlCode::Right,
    CecUserControlCode::RootMenu,
    CecUserControlCode::SetupMenu,
    CecUserControlCode::ContentsMenu,
    CecUserControlCode::FavoriteMenu,
    CecUserControlCode::Exit,
    CecUserControlCode::Number0,
    CecUserControlCode::Number1,
    CecUserControlCode::Number2,
    CecUserControlCode::Number3,
    CecUserControlCode::Number4,
    CecUserControlCode::Number5,
    CecUserControlCode::Number6,
    CecUserControlCode::Number7,
    CecUserControlCode::Number8,
    CecUserControlCode::Number9,
    CecUserControlCode::Dot,
    CecUserControlCode::Enter,
    CecUserControlCode::Clear,
    CecUserControlCode::ChannelUp,
    CecUserControlCode::ChannelDown,
    CecUserControlCode::PreviousChannel,
    CecUserControlCode::SoundSelect,
    CecUserControlCode::InputSelect,
    CecUserControlCode::DisplayInformation,
    CecUserControlCode::Help,
    CecUserControlCode::PageUp,
    CecUserControlCode::PageDown,
    CecUserControlCode::Power,
    CecUserControlCode::VolumeUp,
    CecUserControlCode::VolumeDown,
    CecUserControlCode::Mute,
    CecUserControlCode::Play,
    CecUserControlCode::Stop,
    CecUserControlCode::Pause,
    CecUserControlCode::Record,
    CecUserControlCode::Rewind,
    CecUserControlCode::FastForward,
    CecUserControlCode::Eject,
    CecUserControlCode::Forward,
    CecUserControlCode::Backward,
    CecUserControlCode::F1Blue,
    CecUserControlCode::F2Red,
    CecUserControlCode::F3Green,
    CecUserControlCode::F4Yellow,
    CecUserControlCode::F5,
];

impl CecUserControlCode {
    /// Returns the control code's operand value on the CEC bus.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a raw operand byte from the adapter callback.
    ///
    /// Returns `None` for operand values this bridge does not define; the
    /// caller treats those the same as unmapped buttons.
    pub fn from_code(code: u8) -> Option<Self> {
        ALL_CEC_CODES.iter().copied().find(|c| c.code() == code)
    }

    /// Resolves a symbolic name from the configuration keymap.
    ///
    /// Matching is case-sensitive and exact.
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "select" => Self::Select,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "root_menu" => Self::RootMenu,
            "setup_menu" => Self::SetupMenu,
            "contents_menu" => Self::ContentsMenu,
            "favorite_menu" => Self::FavoriteMenu,
            "exit" => Self::Exit,
            "0" => Self::Number0,
            "1" => Self::Number1,
            "2" => Self::Number2,
            "3" => Self::Number3,
            "4" => Self::Number4,
            "5" => Self::Number5,
            "6" => Self::Number6,
            "7" => Self::Number7,
            "8" => Self::Number8,
            "9" => Self::Number9,
            "dot" => Self::Dot,
            "enter" => Self::Enter,
            "clear" => Self::Clear,
            "channel_up" => Self::ChannelUp,
            "channel_down" => Self::ChannelDown,
            "previous_channel" => Self::PreviousChannel,
            "sound_select" => Self::SoundSelect,
            "input_select" => Self::InputSelect,
            "display_info" => Self::DisplayInformation,
            "help" => Self::Help,
            "page_up" => Self::PageUp,
            "page_down" => Self::PageDown,
            "power" => Self::Power,
            "volume_up" => Self::VolumeUp,
            "volume_down" => Self::VolumeDown,
            "mute" => Self::Mute,
            "play" => Self::Play,
            "stop" => Self::Stop,
            "pause" => Self::Pause,
            "record" => Self::Record,
            "rewind" => Self::Rewind,
            "fast_forward" => Self::FastForward,
            "eject" => Self::Eject,
            "forward" => Self::Forward,
            "backward" => Self::Backward,
            "blue" => Self::F1Blue,
            "red" => Self::F2Red,
            "green" => Self::F3Green,
            "yellow" => Self::F4Yellow,
            "f5" => Self::F5,
            _ => return None,
        };
        Some(code)
    }

    /// Returns the symbolic name used in the configuration keymap.
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::RootMenu => "root_menu",
            Self::SetupMenu => "setup_menu",
            Self::ContentsMenu => "contents_menu",
            Self::FavoriteMenu => "favorite_menu",
            Self::Exit => "exit",
            Self::Number0 => "0",
            Self::Number1 => "1",
            Self::Number2 => "2",
            Self::Number3 => "3",
            Self::Number4 => "4",
            Self::Number5 => "5",
            Self::Number6 => "6",
            Self::Number7 => "7",
            Self::Number8 => "8",
            Self::Number9 => "9",
            Self::Dot => "dot",
            Self::Enter => "enter",
            Self::Clear => "clear",
            Self::ChannelUp => "channel_up",
            Self::ChannelDown => "channel_down",
            Self::PreviousChannel => "previous_channel",
            Self::SoundSelect => "sound_select",
            Self::InputSelect => "input_select",
            Self::DisplayInformation => "display_info",
            Self::Help => "help",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::Power => "power",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
            Self::Mute => "mute",
            Self::Play => "play",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::Record => "record",
            Self::Rewind => "rewind",
            Self::FastForward => "fast_forward",
            Self::Eject => "eject",
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::F1Blue => "blue",
            Self::F2Red => "red",
            Self::F3Green => "green",
            Self::F4Yellow => "yellow",
            Self::F5 => "f5",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_match_cec_table() {
        assert_eq!(CecUserControlCode::Select.code(), 0x00);
        assert_eq!(CecUserControlCode::Exit.code(), 0x0D);
        assert_eq!(CecUserControlCode::Number0.code(), 0x20);
        assert_eq!(CecUserControlCode::Power.code(), 0x40);
        assert_eq!(CecUserControlCode::VolumeUp.code(), 0x41);
        assert_eq!(CecUserControlCode::F2Red.code(), 0x72);
    }

    #[test]
    fn test_from_code_resolves_defined_operands() {
        assert_eq!(
            CecUserControlCode::from_code(0x44),
            Some(CecUserControlCode::Play)
        );
        assert_eq!(
            CecUserControlCode::from_code(0x01),
            Some(CecUserControlCode::Up)
        );
    }

    #[test]
    fn test_from_code_returns_none_for_undefined_operand() {
        // 0xFF is CEC_USER_CONTROL_CODE_UNKNOWN territory — not a button.
        assert_eq!(CecUserControlCode::from_code(0xFF), None);
    }

    #[test]
    fn test_name_round_trips_through_from_name_for_all_codes() {
        for &code in ALL_CEC_CODES {
            assert_eq!(
                CecUserControlCode::from_name(code.name()),
                Some(code),
                "name '{}' must resolve back to {code:?}",
                code.name()
            );
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(CecUserControlCode::from_name("select"), Some(CecUserControlCode::Select));
        assert_eq!(CecUserControlCode::from_name("Select"), None);
        assert_eq!(CecUserControlCode::from_name("SELECT"), None);
    }

    #[test]
    fn test_from_name_rejects_unknown_names() {
        assert_eq!(CecUserControlCode::from_name("teleport"), None);
        assert_eq!(CecUserControlCode::from_name(""), None);
    }

    #[test]
    fn test_all_cec_codes_is_ascending_and_duplicate_free() {
        for pair in ALL_CEC_CODES.windows(2) {
            assert!(
                pair[0].code() < pair[1].code(),
                "{:?} must sort before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
