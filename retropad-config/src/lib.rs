//! Persisted input-configuration model for the retropad front end.
//!
//! The configuration store hands this crate whole documents; conversion into
//! the driver's runtime tables is partial-success: an entry that fails to
//! parse is dropped with a warning and the rest of the table loads normally.
//! Persistence itself (where the documents live) stays outside this crate.

use retropad_driver::keys::keycode;
use retropad_driver::mapping::MappingTable;
use retropad_driver::session::InputTables;
use retropad_driver::{
    ControllerIdentity, HotkeyAction, HotkeyBinding, InputSource, PortAssignment, RetroButton,
    SessionOptions, ShoulderButtons,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing input config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Error serializing input config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One persisted hotkey row, as the configuration store records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyEntry {
    /// Action name, e.g. `"QuickSave"`.
    pub action: String,
    /// Chord as a JSON array of physical key codes, e.g. `"[109, 102]"`.
    /// An empty string means no chord is set.
    #[serde(default)]
    pub chord: String,
    /// Restrict to one controller; absent means any controller.
    #[serde(default)]
    pub controller: Option<ControllerIdentity>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl HotkeyEntry {
    fn to_binding(&self) -> Option<HotkeyBinding> {
        let action = match self.action.parse::<HotkeyAction>() {
            Ok(action) => action,
            Err(err) => {
                log::warn!("Dropping hotkey entry: {err}");
                return None;
            }
        };

        let Some(chord) = parse_chord(&self.chord) else {
            log::warn!("Dropping {action} hotkey, unparseable chord data: '{}'", self.chord);
            return None;
        };

        Some(HotkeyBinding {
            action,
            chord,
            controller: self.controller.clone(),
            enabled: self.enabled,
        })
    }
}

/// Parses a persisted chord string. Empty input is an unset (never-matching)
/// chord, not an error.
#[must_use]
pub fn parse_chord(s: &str) -> Option<Vec<u16>> {
    if s.trim().is_empty() {
        return Some(Vec::new());
    }
    serde_json::from_str(s).ok()
}

/// Renders a chord in the persisted JSON-array format.
#[must_use]
pub fn chord_json(codes: &[u16]) -> String {
    serde_json::to_string(codes).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAppConfig {
    #[serde(default = "default_true")]
    pub limit_hotkeys_to_player1: bool,
    #[serde(default)]
    pub analog_as_dpad: bool,
    #[serde(default)]
    pub dpad_as_analog: bool,
    /// Platform slug of the emulated system; selects shoulder-button
    /// filtering. Empty disables filtering.
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub controller_order: Vec<PortAssignment>,
    /// Controller identity -> (input source string -> retro button).
    /// Source keys use the `"Button 96"` / `"Axis 0 +"` display form.
    #[serde(default)]
    pub mappings: BTreeMap<ControllerIdentity, BTreeMap<String, RetroButton>>,
    #[serde(default = "default_hotkeys")]
    pub hotkeys: Vec<HotkeyEntry>,
}

impl InputAppConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Converts the persisted document into the driver's runtime tables,
    /// dropping individual malformed entries.
    #[must_use]
    pub fn to_tables(&self) -> InputTables {
        let mut mappings: FxHashMap<ControllerIdentity, MappingTable> = FxHashMap::default();
        for (identity, table) in &self.mappings {
            let mut parsed = MappingTable::default();
            for (source, &button) in table {
                match source.parse::<InputSource>() {
                    Ok(source) => {
                        parsed.insert(source, button);
                    }
                    Err(err) => log::warn!("Dropping mapping entry for {identity}: {err}"),
                }
            }
            mappings.insert(identity.clone(), parsed);
        }

        InputTables {
            controller_order: self.controller_order.clone(),
            mappings,
            hotkeys: self.hotkeys.iter().filter_map(HotkeyEntry::to_binding).collect(),
        }
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            limit_hotkeys_to_player1: self.limit_hotkeys_to_player1,
            analog_as_dpad: self.analog_as_dpad,
            dpad_as_analog: self.dpad_as_analog,
            shoulders: if self.platform.is_empty() {
                ShoulderButtons::Full
            } else {
                ShoulderButtons::for_platform(&self.platform)
            },
        }
    }
}

impl Default for InputAppConfig {
    fn default() -> Self {
        toml::from_str("").unwrap()
    }
}

fn default_true() -> bool {
    true
}

/// The stock hotkey set a fresh installation starts with. Suspend ships
/// disabled with no chord.
#[must_use]
pub fn default_hotkeys() -> Vec<HotkeyEntry> {
    fn entry(action: HotkeyAction, chord: &[u16]) -> HotkeyEntry {
        HotkeyEntry {
            action: action.to_string(),
            chord: chord_json(chord),
            controller: None,
            enabled: true,
        }
    }

    vec![
        entry(HotkeyAction::OpenMenu, &[keycode::BACK]),
        entry(HotkeyAction::QuickSave, &[keycode::BUTTON_SELECT, keycode::BUTTON_L1]),
        entry(HotkeyAction::QuickLoad, &[keycode::BUTTON_SELECT, keycode::BUTTON_R1]),
        entry(HotkeyAction::FastForward, &[keycode::BUTTON_SELECT, keycode::BUTTON_R2]),
        entry(HotkeyAction::Rewind, &[keycode::BUTTON_SELECT, keycode::BUTTON_L2]),
        HotkeyEntry {
            action: HotkeyAction::Suspend.to_string(),
            chord: String::new(),
            controller: None,
            enabled: false,
        },
    ]
}
