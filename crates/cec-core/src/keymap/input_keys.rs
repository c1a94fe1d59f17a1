//! Linux input event key codes (`KEY_*` from `input-event-codes.h`).
//!
//! These are the codes written to the uinput virtual keyboard. Symbolic names
//! use the kernel's `KEY_*` spellings so a keymap entry can be checked against
//! the kernel header directly.

use serde::{Deserialize, Serialize};

/// An injectable keyboard key, identified by its kernel input event code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum InputKeyCode {
    // Main block
    Esc = 1,
    Num1 = 2,
    Num2 = 3,
    Num3 = 4,
    Num4 = 5,
    Num5 = 6,
    Num6 = 7,
    Num7 = 8,
    Num8 = 9,
    Num9 = 10,
    Num0 = 11,
    Backspace = 14,
    Tab = 15,
    Enter = 28,
    Space = 57,
    Dot = 52,

    // Function keys
    F1 = 59,
    F2 = 60,
    F3 = 61,
    F4 = 62,
    F5 = 63,
    F6 = 64,
    F7 = 65,
    F8 = 66,
    F9 = 67,
    F10 = 68,

    // Navigation cluster
    Home = 102,
    Up = 103,
    PageUp = 104,
    Left = 105,
    Right = 106,
    End = 107,
    Down = 108,
    PageDown = 109,
    Insert = 110,
    Delete = 111,

    // Audio and power
    Mute = 113,
    VolumeDown = 114,
    VolumeUp = 115,
    Power = 116,
    Pause = 119,

    // Consumer keys
    Help = 138,
    Menu = 139,
    Back = 158,
    Forward = 159,
    EjectCd = 161,
    NextSong = 163,
    PlayPause = 164,
    PreviousSong = 165,
    StopCd = 166,
    Record = 167,
    Rewind = 168,
    Exit = 174,
    Play = 207,
    FastForward = 208,

    // Remote-control keys
    Ok = 352,
    Select = 353,
    Clear = 355,
    Info = 358,
    Red = 398,
    Green = 399,
    Yellow = 400,
    Blue = 401,
    ChannelUp = 402,
    ChannelDown = 403,
    Previous = 412,
}

/// Every defined key, in ascending kernel-code order.
pub const ALL_INPUT_KEYS: &[InputKeyCode] = &[
    InputKeyCode::Esc,
    InputKeyCode::Num1,
    InputKeyCode::Num2,
    InputKeyCode::Num3,
    InputKeyCode::Num4,
    InputKeyCode::Num5,
    InputKeyCode::Num6,
    InputKeyCode::Num7,
    InputKeyCode::Num8,
    InputKeyCode::Num9,
    InputKeyCode::Num0,
    InputKeyCode::Backspace,
    InputKeyCode::Tab,
    InputKeyCode::Enter,
    InputKeyCode::Dot,
    InputKeyCode::Space,
    InputKeyCode::F1,
    InputKeyCode::F2,
    InputKeyCode::F3,
    InputKeyCode::F4,
    InputKeyCode::F5,
    InputKeyCode::F6,
    InputKeyCode::F7,
    InputKeyCode::F8,
    InputKeyCode::F9,
    InputKeyCode::F10,
    InputKeyCode::Home,
    InputKeyCode::Up,
    InputKeyCode::PageUp,
    InputKeyCode::Left,
    InputKeyCode::Right,
    InputKeyCode::End,
    InputKeyCode::Down,
    InputKeyCode::PageDown,
    InputKeyCode::Insert,
    InputKeyCode::Delete,
    InputKeyCode::Mute,
    InputKeyCode::VolumeDown,
    InputKeyCode::VolumeUp,
    InputKeyCode::Power,
    InputKeyCode::Pause,
    InputKeyCode::Help,
    InputKeyCode::Menu,
    InputKeyCode::Back,
    InputKeyCode::Forward,
    InputKeyCode::EjectCd,
    InputKeyCode::NextSong,
    InputKeyCode::PlayPause,
    InputKeyCode::PreviousSong,
    InputKeyCode::StopCd,
    InputKeyCode::Record,
    InputKeyCode::Rewind,
    InputKeyCode::Exit,
    InputKeyCode::Play,
    InputKeyCode::FastForward,
    InputKeyCode::Ok,
    InputKeyCode::Select,
    InputKeyCode::Clear,
    InputKeyCode::Info,
    InputKeyCode::Red,
    InputKeyCode::Green,
    InputKeyCode::Yellow,
    InputKeyCode::Blue,
    InputKeyCode::ChannelUp,
    InputKeyCode::ChannelDown,
    InputKeyCode::Previous,
];

impl InputKeyCode {
    /// Returns the kernel input event code (`KEY_*` value).
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Resolves a kernel-style symbolic name (`"KEY_ENTER"`).
    ///
    /// Matching is case-sensitive and exact.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "KEY_ESC" => Self::Esc,
            "KEY_1" => Self::Num1,
            "KEY_2" => Self::Num2,
            "KEY_3" => Self::Num3,
            "KEY_4" => Self::Num4,
            "KEY_5" => Self::Num5,
            "KEY_6" => Self::Num6,
            "KEY_7" => Self::Num7,
            "KEY_8" => Self::Num8,
            "KEY_9" => Self::Num9,
            "KEY_0" => Self::Num0,
            "KEY_BACKSPACE" => Self::Backspace,
            "KEY_TAB" => Self::Tab,
            "KEY_ENTER" => Self::Enter,
            "KEY_DOT" => Self::Dot,
            "KEY_SPACE" => Self::Space,
            "KEY_F1" => Self::F1,
            "KEY_F2" => Self::F2,
            "KEY_F3" => Self::F3,
            "KEY_F4" => Self::F4,
            "KEY_F5" => Self::F5,
            "KEY_F6" => Self::F6,
            "KEY_F7" => Self::F7,
            "KEY_F8" => Self::F8,
            "KEY_F9" => Self::F9,
            "KEY_F10" => Self::F10,
            "KEY_HOME" => Self::Home,
            "KEY_UP" => Self::Up,
            "KEY_PAGEUP" => Self::PageUp,
            "KEY_LEFT" => Self::Left,
            "KEY_RIGHT" => Self::Right,
            "KEY_END" => Self::End,
            "KEY_DOWN" => Self::Down,
            "KEY_PAGEDOWN" => Self::PageDown,
            "KEY_INSERT" => Self::Insert,
            "KEY_DELETE" => Self::Delete,
            "KEY_MUTE" => Self::Mute,
            "KEY_VOLUMEDOWN" => Self::VolumeDown,
            "KEY_VOLUMEUP" => Self::VolumeUp,
            "KEY_POWER" => Self::Power,
            "KEY_PAUSE" => Self::Pause,
            "KEY_HELP" => Self::Help,
            "KEY_MENU" => Self::Menu,
            "KEY_BACK" => Self::Back,
            "KEY_FORWARD" => Self::Forward,
            "KEY_EJECTCD" => Self::EjectCd,
            "KEY_NEXTSONG" => Self::NextSong,
            "KEY_PLAYPAUSE" => Self::PlayPause,
            "KEY_PREVIOUSSONG" => Self::PreviousSong,
            "KEY_STOPCD" => Self::StopCd,
            "KEY_RECORD" => Self::Record,
            "KEY_REWIND" => Self::Rewind,
            "KEY_EXIT" => Self::Exit,
            "KEY_PLAY" => Self::Play,
            "KEY_FASTFORWARD" => Self::FastForward,
            "KEY_OK" => Self::Ok,
            "KEY_SELECT" => Self::Select,
            "KEY_CLEAR" => Self::Clear,
            "KEY_INFO" => Self::Info,
            "KEY_RED" => Self::Red,
            "KEY_GREEN" => Self::Green,
            "KEY_YELLOW" => Self::Yellow,
            "KEY_BLUE" => Self::Blue,
            "KEY_CHANNELUP" => Self::ChannelUp,
            "KEY_CHANNELDOWN" => Self::ChannelDown,
            "KEY_PREVIOUS" => Self::Previous,
            _ => return None,
        };
        Some(key)
    }

    /// Returns the kernel-style symbolic name (`"KEY_ENTER"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Esc => "KEY_ESC",
            Self::Num1 => "KEY_1",
            Self::Num2 => "KEY_2",
            Self::Num3 => "KEY_3",
            Self::Num4 => "KEY_4",
            Self::Num5 => "KEY_5",
            Self::Num6 => "KEY_6",
            Self::Num7 => "KEY_7",
            Self::Num8 => "KEY_8",
            Self::Num9 => "KEY_9",
            Self::Num0 => "KEY_0",
            Self::Backspace => "KEY_BACKSPACE",
            Self::Tab => "KEY_TAB",
            Self::Enter => "KEY_ENTER",
            Self::Dot => "KEY_DOT",
            Self::Space => "KEY_SPACE",
            Self::F1 => "KEY_F1",
            Self::F2 => "KEY_F2",
            Self::F3 => "KEY_F3",
            Self::F4 => "KEY_F4",
            Self::F5 => "KEY_F5",
            Self::F6 => "KEY_F6",
            Self::F7 => "KEY_F7",
            Self::F8 => "KEY_F8",
            Self::F9 => "KEY_F9",
            Self::F10 => "KEY_F10",
            Self::Home => "KEY_HOME",
            Self::Up => "KEY_UP",
            Self::PageUp => "KEY_PAGEUP",
            Self::Left => "KEY_LEFT",
            Self::Right => "KEY_RIGHT",
            Self::End => "KEY_END",
            Self::Down => "KEY_DOWN",
            Self::PageDown => "KEY_PAGEDOWN",
            Self::Insert => "KEY_INSERT",
            Self::Delete => "KEY_DELETE",
            Self::Mute => "KEY_MUTE",
            Self::VolumeDown => "KEY_VOLUMEDOWN",
            Self::VolumeUp => "KEY_VOLUMEUP",
            Self::Power => "KEY_POWER",
            Self::Pause => "KEY_PAUSE",
            Self::Help => "KEY_HELP",
            Self::Menu => "KEY_MENU",
            Self::Back => "KEY_BACK",
            Self::Forward => "KEY_FORWARD",
            Self::EjectCd => "KEY_EJECTCD",
            Self::NextSong => "KEY_NEXTSONG",
            Self::PlayPause => "KEY_PLAYPAUSE",
            Self::PreviousSong => "KEY_PREVIOUSSONG",
            Self::StopCd => "KEY_STOPCD",
            Self::Record => "KEY_RECORD",
            Self::Rewind => "KEY_REWIND",
            Self::Exit => "KEY_EXIT",
            Self::Play => "KEY_PLAY",
            Self::FastForward => "KEY_FASTFORWARD",
            Self::Ok => "KEY_OK",
            Self::Select => "KEY_SELECT",
            Self::Clear => "KEY_CLEAR",
            Self::Info => "KEY_INFO",
            Self::Red => "KEY_RED",
            Self::Green => "KEY_GREEN",
            Self::Yellow => "KEY_YELLOW",
            Self::Blue => "KEY_BLUE",
            Self::ChannelUp => "KEY_CHANNELUP",
            Self::ChannelDown => "KEY_CHANNELDOWN",
            Self::Previous => "KEY_PREVIOUS",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
