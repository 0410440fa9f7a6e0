//! Routes detected hotkey actions to their side effects. This is the single
//! effectful boundary of the translation core; every failure path degrades
//! to a user-visible notification.

use crate::config::input::HotkeyAction;
use crate::frontend::{FrontendShell, SaveStateBridge};
use crate::hotkeys::HotkeyDetector;

pub struct HotkeyDispatcher<S, V> {
    shell: S,
    saves: V,
    fast_forwarding: bool,
    rewinding: bool,
}

impl<S: FrontendShell, V: SaveStateBridge> HotkeyDispatcher<S, V> {
    pub fn new(shell: S, saves: V) -> Self {
        Self { shell, saves, fast_forwarding: false, rewinding: false }
    }

    /// Dispatches one action. Returns whether the action was handled; a
    /// policy refusal (rewind while disabled) reports `false` so the
    /// keypress falls through to gameplay.
    ///
    /// One-shot actions clear the detector state afterwards so the chord
    /// cannot re-fire while still held.
    pub fn dispatch(&mut self, action: HotkeyAction, detector: &mut HotkeyDetector) -> bool {
        match action {
            HotkeyAction::OpenMenu => {
                self.shell.show_menu();
                detector.clear();
                true
            }
            HotkeyAction::QuickSave => {
                if self.shell.is_hardcore_mode() {
                    self.shell.notify("Save states disabled in hardcore mode");
                } else if self.saves.quick_save() {
                    self.shell.notify("State saved");
                } else {
                    self.shell.notify("Failed to save state");
                }
                detector.clear();
                true
            }
            HotkeyAction::QuickLoad => {
                if self.shell.is_hardcore_mode() {
                    self.shell.notify("Save states disabled in hardcore mode");
                } else if self.saves.quick_load() {
                    self.shell.notify("State loaded");
                } else {
                    self.shell.notify("Failed to load state");
                }
                detector.clear();
                true
            }
            HotkeyAction::FastForward => {
                // Continuous: cleared by the caller once the chord releases
                self.fast_forwarding = true;
                true
            }
            HotkeyAction::Rewind => {
                if self.shell.is_hardcore_mode() || !self.shell.is_rewind_enabled() {
                    return false;
                }
                self.rewinding = true;
                true
            }
            HotkeyAction::Suspend => {
                if !self.saves.flush_save_ram() {
                    self.shell.notify("Failed to save game data");
                }
                self.shell.quit();
                true
            }
        }
    }

    #[must_use]
    pub fn is_fast_forwarding(&self) -> bool {
        self.fast_forwarding
    }

    #[must_use]
    pub fn is_rewinding(&self) -> bool {
        self.rewinding
    }

    pub fn stop_fast_forward(&mut self) {
        self.fast_forwarding = false;
    }

    pub fn stop_rewind(&mut self) {
        self.rewinding = false;
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    pub fn saves(&self) -> &V {
        &self.saves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::input::HotkeyBinding;
    use crate::frontend::tests_support::{TestSaves, TestShell};
    use crate::keys::keycode;

    fn dispatcher() -> HotkeyDispatcher<TestShell, TestSaves> {
        HotkeyDispatcher::new(
            TestShell { rewind_enabled: true, ..TestShell::default() },
            TestSaves { save_result: true, load_result: true, flush_result: true, ..TestSaves::default() },
        )
    }

    #[test]
    fn menu_shows_and_clears_detector() {
        let mut detector = HotkeyDetector::new();
        detector.set_bindings(&[HotkeyBinding {
            action: HotkeyAction::OpenMenu,
            chord: vec![keycode::BUTTON_L1, keycode::BUTTON_R1],
            controller: None,
            enabled: true,
        }]);
        detector.on_key_down(keycode::BUTTON_L1, None);
        detector.on_key_down(keycode::BUTTON_R1, None);

        let mut dispatcher = dispatcher();
        assert!(dispatcher.dispatch(HotkeyAction::OpenMenu, &mut detector));

        assert_eq!(1, dispatcher.shell().menu_shown);
        assert_eq!(None, detector.triggered_action());
        assert!(!detector.is_active(HotkeyAction::OpenMenu));
    }

    #[test]
    fn quick_save_notifies_success_and_failure() {
        let mut detector = HotkeyDetector::new();

        let mut dispatcher = dispatcher();
        assert!(dispatcher.dispatch(HotkeyAction::QuickSave, &mut detector));
        assert_eq!(vec!["State saved"], dispatcher.shell().notifications);
        assert_eq!(1, dispatcher.saves().save_calls);

        let mut dispatcher = HotkeyDispatcher::new(
            TestShell::default(),
            TestSaves { save_result: false, ..TestSaves::default() },
        );
        assert!(dispatcher.dispatch(HotkeyAction::QuickSave, &mut detector));
        assert_eq!(vec!["Failed to save state"], dispatcher.shell().notifications);
    }

    #[test]
    fn hardcore_mode_refuses_save_states_with_notification() {
        let mut detector = HotkeyDetector::new();
        let mut dispatcher = HotkeyDispatcher::new(
            TestShell { hardcore: true, ..TestShell::default() },
            TestSaves { save_result: true, load_result: true, ..TestSaves::default() },
        );

        assert!(dispatcher.dispatch(HotkeyAction::QuickSave, &mut detector));
        assert!(dispatcher.dispatch(HotkeyAction::QuickLoad, &mut detector));

        assert_eq!(0, dispatcher.saves().save_calls);
        assert_eq!(0, dispatcher.saves().load_calls);
        assert_eq!(
            vec!["Save states disabled in hardcore mode"; 2],
            dispatcher.shell().notifications
        );
    }

    #[test]
    fn fast_forward_sets_continuous_flag() {
        let mut detector = HotkeyDetector::new();
        let mut dispatcher = dispatcher();

        assert!(dispatcher.dispatch(HotkeyAction::FastForward, &mut detector));
        assert!(dispatcher.is_fast_forwarding());

        dispatcher.stop_fast_forward();
        assert!(!dispatcher.is_fast_forwarding());
    }

    #[test]
    fn rewind_refused_in_hardcore_or_when_disabled() {
        let mut detector = HotkeyDetector::new();

        let mut dispatcher = HotkeyDispatcher::new(
            TestShell { hardcore: true, rewind_enabled: true, ..TestShell::default() },
            TestSaves::default(),
        );
        assert!(!dispatcher.dispatch(HotkeyAction::Rewind, &mut detector));
        assert!(!dispatcher.is_rewinding());

        let mut dispatcher = HotkeyDispatcher::new(
            TestShell { rewind_enabled: false, ..TestShell::default() },
            TestSaves::default(),
        );
        assert!(!dispatcher.dispatch(HotkeyAction::Rewind, &mut detector));
        assert!(!dispatcher.is_rewinding());

        let mut dispatcher = self::dispatcher();
        assert!(dispatcher.dispatch(HotkeyAction::Rewind, &mut detector));
        assert!(dispatcher.is_rewinding());
    }

    #[test]
    fn suspend_flushes_save_ram_then_quits() {
        let mut detector = HotkeyDetector::new();
        let mut dispatcher = dispatcher();

        assert!(dispatcher.dispatch(HotkeyAction::Suspend, &mut detector));
        assert_eq!(1, dispatcher.saves().flush_calls);
        assert_eq!(1, dispatcher.shell().quit_calls);
        assert!(dispatcher.shell().notifications.is_empty());
    }

    #[test]
    fn suspend_flush_failure_notifies_and_still_quits() {
        let mut detector = HotkeyDetector::new();
        let mut dispatcher = HotkeyDispatcher::new(
            TestShell::default(),
            TestSaves { flush_result: false, ..TestSaves::default() },
        );

        assert!(dispatcher.dispatch(HotkeyAction::Suspend, &mut detector));
        assert_eq!(vec!["Failed to save game data"], dispatcher.shell().notifications);
        assert_eq!(1, dispatcher.shell().quit_calls);
    }
}
