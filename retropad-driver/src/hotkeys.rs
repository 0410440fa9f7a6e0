//! Chord matching over the set of currently-held physical buttons.

use crate::config::input::{ControllerIdentity, HotkeyAction, HotkeyBinding};
use crate::keys::keycode;
use arrayvec::ArrayVec;
use rustc_hash::{FxHashMap, FxHashSet};

pub const MAX_CHORD_LEN: usize = 3;

type ChordArrayVec = ArrayVec<u16, MAX_CHORD_LEN>;

// Only these buttons may ever participate in a chord; anything else is never
// a hotkey candidate regardless of configuration.
const HOTKEY_KEYS: [u16; 15] = [
    keycode::BUTTON_A,
    keycode::BUTTON_B,
    keycode::BUTTON_C,
    keycode::BUTTON_X,
    keycode::BUTTON_Y,
    keycode::BUTTON_Z,
    keycode::BUTTON_L1,
    keycode::BUTTON_R1,
    keycode::BUTTON_L2,
    keycode::BUTTON_R2,
    keycode::BUTTON_START,
    keycode::BUTTON_SELECT,
    keycode::BUTTON_THUMBL,
    keycode::BUTTON_THUMBR,
    keycode::BACK,
];

#[must_use]
pub fn is_hotkey_key(code: u16) -> bool {
    HOTKEY_KEYS.contains(&code)
}

#[derive(Debug, Clone)]
struct ChordBinding {
    action: HotkeyAction,
    chord: ChordArrayVec,
    controller: Option<ControllerIdentity>,
    enabled: bool,
}

/// Per-session chord state machine. One instance serves every controller,
/// since a binding may apply to any device.
///
/// One-shot actions are reported on key-down; key-up returns the cached
/// triggered action so callers can react to the release of a continuous-hold
/// combo, and [`HotkeyDetector::is_active`] re-evaluates held chords for
/// actions that must be polled every frame.
#[derive(Debug, Clone, Default)]
pub struct HotkeyDetector {
    bindings: Vec<ChordBinding>,
    pressed: FxHashSet<u16>,
    triggered: Option<HotkeyAction>,
    limit_to_player1: bool,
    player1_controller: Option<ControllerIdentity>,
    mapped_buttons: FxHashMap<ControllerIdentity, FxHashSet<u16>>,
}

impl HotkeyDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all bindings, preserving configured order (first match wins).
    /// Chords longer than [`MAX_CHORD_LEN`] are dropped.
    pub fn set_bindings(&mut self, bindings: &[HotkeyBinding]) {
        self.bindings.clear();

        for binding in bindings {
            if binding.chord.len() > MAX_CHORD_LEN {
                log::error!("Ignoring hotkey chord, too many inputs: {:?}", binding.chord);
                continue;
            }

            self.bindings.push(ChordBinding {
                action: binding.action,
                chord: binding.chord.iter().copied().collect(),
                controller: binding.controller.clone(),
                enabled: binding.enabled,
            });
        }
    }

    pub fn set_limit_to_player1(&mut self, limit: bool) {
        self.limit_to_player1 = limit;
    }

    pub fn set_player1_controller(&mut self, controller: Option<ControllerIdentity>) {
        self.player1_controller = controller;
    }

    /// Per-controller sets of physical buttons bound to gameplay actions.
    /// A single-key chord is suppressed on a device where that exact key is
    /// gameplay-mapped, so hotkeys cannot steal playable input.
    pub fn set_mapped_buttons(&mut self, mapped: FxHashMap<ControllerIdentity, FxHashSet<u16>>) {
        self.mapped_buttons = mapped;
    }

    pub fn on_key_down(
        &mut self,
        code: u16,
        controller: Option<&ControllerIdentity>,
    ) -> Option<HotkeyAction> {
        if !is_hotkey_key(code) {
            return None;
        }

        if self.limit_to_player1 {
            if let Some(player1) = &self.player1_controller {
                if controller != Some(player1) {
                    return None;
                }
            }
        }

        self.pressed.insert(code);
        self.triggered = None;

        for binding in &self.bindings {
            if !binding.enabled {
                continue;
            }
            if let Some(bound) = &binding.controller {
                if controller != Some(bound) {
                    continue;
                }
            }
            if binding.chord.is_empty()
                || !binding.chord.iter().all(|key| self.pressed.contains(key))
            {
                continue;
            }
            if binding.chord.len() == 1 {
                if let Some(controller) = controller {
                    let gameplay_mapped = self
                        .mapped_buttons
                        .get(controller)
                        .is_some_and(|buttons| buttons.contains(&binding.chord[0]));
                    if gameplay_mapped {
                        continue;
                    }
                }
            }

            self.triggered = Some(binding.action);
            return self.triggered;
        }

        None
    }

    /// Removes the key and returns the action cached at trigger time. The
    /// cache is cleared only once every key is released.
    pub fn on_key_up(&mut self, code: u16) -> Option<HotkeyAction> {
        self.pressed.remove(&code);

        let action = self.triggered;
        if self.pressed.is_empty() {
            self.triggered = None;
        }
        action
    }

    /// Whether the action's chord is currently held in full.
    #[must_use]
    pub fn is_active(&self, action: HotkeyAction) -> bool {
        self.bindings
            .iter()
            .find(|binding| binding.action == action && binding.enabled)
            .is_some_and(|binding| {
                !binding.chord.is_empty()
                    && binding.chord.iter().all(|key| self.pressed.contains(key))
            })
    }

    #[must_use]
    pub fn triggered_action(&self) -> Option<HotkeyAction> {
        self.triggered
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
        self.triggered = None;
    }
}
