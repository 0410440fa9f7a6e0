pub mod input;

use crate::keys::ShoulderButtons;

/// Per-session behavior toggles, queried on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub limit_hotkeys_to_player1: bool,
    pub analog_as_dpad: bool,
    pub dpad_as_analog: bool,
    pub shoulders: ShoulderButtons,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            limit_hotkeys_to_player1: true,
            analog_as_dpad: false,
            dpad_as_analog: false,
            shoulders: ShoulderButtons::Full,
        }
    }
}
