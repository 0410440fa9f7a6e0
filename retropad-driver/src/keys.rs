//! The physical key and axis code space delivered by the host input layer.
//!
//! Translated output events use the same code space, so codes with no named
//! constant here pass through the translator unchanged.

use crate::config::input::RetroButton;
use std::borrow::Cow;

pub mod keycode {
    pub const UNKNOWN: u16 = 0;
    pub const BACK: u16 = 4;

    pub const DPAD_UP: u16 = 19;
    pub const DPAD_DOWN: u16 = 20;
    pub const DPAD_LEFT: u16 = 21;
    pub const DPAD_RIGHT: u16 = 22;

    pub const BUTTON_A: u16 = 96;
    pub const BUTTON_B: u16 = 97;
    pub const BUTTON_C: u16 = 98;
    pub const BUTTON_X: u16 = 99;
    pub const BUTTON_Y: u16 = 100;
    pub const BUTTON_Z: u16 = 101;
    pub const BUTTON_L1: u16 = 102;
    pub const BUTTON_R1: u16 = 103;
    pub const BUTTON_L2: u16 = 104;
    pub const BUTTON_R2: u16 = 105;
    pub const BUTTON_THUMBL: u16 = 106;
    pub const BUTTON_THUMBR: u16 = 107;
    pub const BUTTON_START: u16 = 108;
    pub const BUTTON_SELECT: u16 = 109;
    pub const BUTTON_MODE: u16 = 110;
}

pub mod axis {
    pub const X: u16 = 0;
    pub const Y: u16 = 1;
    pub const Z: u16 = 11;
    pub const RZ: u16 = 14;
    pub const HAT_X: u16 = 15;
    pub const HAT_Y: u16 = 16;
    pub const LTRIGGER: u16 = 17;
    pub const RTRIGGER: u16 = 18;
}

/// The physical output code each virtual console button produces.
#[must_use]
pub fn retro_button_keycode(button: RetroButton) -> u16 {
    match button {
        RetroButton::A => keycode::BUTTON_A,
        RetroButton::B => keycode::BUTTON_B,
        RetroButton::X => keycode::BUTTON_X,
        RetroButton::Y => keycode::BUTTON_Y,
        RetroButton::Start => keycode::BUTTON_START,
        RetroButton::Select => keycode::BUTTON_SELECT,
        RetroButton::L => keycode::BUTTON_L1,
        RetroButton::R => keycode::BUTTON_R1,
        RetroButton::L2 => keycode::BUTTON_L2,
        RetroButton::R2 => keycode::BUTTON_R2,
        RetroButton::L3 => keycode::BUTTON_THUMBL,
        RetroButton::R3 => keycode::BUTTON_THUMBR,
        RetroButton::Up => keycode::DPAD_UP,
        RetroButton::Down => keycode::DPAD_DOWN,
        RetroButton::Left => keycode::DPAD_LEFT,
        RetroButton::Right => keycode::DPAD_RIGHT,
    }
}

#[must_use]
pub fn key_name(code: u16) -> Cow<'static, str> {
    match code {
        keycode::BUTTON_A => "A".into(),
        keycode::BUTTON_B => "B".into(),
        keycode::BUTTON_C => "M1".into(),
        keycode::BUTTON_X => "X".into(),
        keycode::BUTTON_Y => "Y".into(),
        keycode::BUTTON_Z => "M2".into(),
        keycode::BUTTON_L1 => "L1".into(),
        keycode::BUTTON_R1 => "R1".into(),
        keycode::BUTTON_L2 => "L2".into(),
        keycode::BUTTON_R2 => "R2".into(),
        keycode::BUTTON_START => "Start".into(),
        keycode::BUTTON_SELECT => "Select".into(),
        keycode::BUTTON_THUMBL => "L3".into(),
        keycode::BUTTON_THUMBR => "R3".into(),
        keycode::BACK => "Back".into(),
        keycode::DPAD_UP => "Up".into(),
        keycode::DPAD_DOWN => "Down".into(),
        keycode::DPAD_LEFT => "Left".into(),
        keycode::DPAD_RIGHT => "Right".into(),
        _ => format!("Key {code}").into(),
    }
}

#[must_use]
pub fn format_chord(codes: &[u16]) -> String {
    if codes.is_empty() {
        return "Not set".into();
    }

    codes.iter().map(|&code| key_name(code)).collect::<Vec<_>>().join(" + ")
}

/// Which shoulder buttons the emulated system actually has. Presses of
/// shoulder buttons the system lacks are filtered out of the gameplay path
/// so they cannot leak into cores that never had them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShoulderButtons {
    /// No shoulder buttons at all (e.g. NES, Game Boy, Master System).
    None,
    /// L1/R1 only (e.g. SNES, GBA).
    Upper,
    /// L1/R1 and L2/R2 (e.g. PlayStation, Dreamcast).
    #[default]
    Full,
}

impl ShoulderButtons {
    #[must_use]
    pub fn for_platform(slug: &str) -> Self {
        if PLATFORMS_WITHOUT_SHOULDERS.contains(&slug) {
            Self::None
        } else if PLATFORMS_WITH_L2_R2.contains(&slug) {
            Self::Full
        } else {
            Self::Upper
        }
    }

    /// Whether a key code should be dropped from the gameplay path.
    #[must_use]
    pub fn filters(self, code: u16) -> bool {
        match code {
            keycode::BUTTON_L1 | keycode::BUTTON_R1 => self == Self::None,
            keycode::BUTTON_L2 | keycode::BUTTON_R2 => self != Self::Full,
            _ => false,
        }
    }
}

const PLATFORMS_WITHOUT_SHOULDERS: &[&str] = &[
    "gb",
    "gbc",
    "nes",
    "fds",
    "sg1000",
    "sms",
    "gg",
    "atari2600",
    "atari5200",
    "atari7800",
    "coleco",
    "intellivision",
    "odyssey2",
    "vectrex",
];

const PLATFORMS_WITH_L2_R2: &[&str] = &[
    "psx",
    "ps1",
    "playstation",
    "dreamcast",
    "dc",
    "saturn",
    "gc",
    "ngc",
    "gamecube",
    "wii",
    "psp",
    "3do",
];
