//! Collaborator seams. The translation core never performs side effects
//! directly; everything effectful goes through one of these traits.

use crate::motion::MotionChannel;

/// The emulator core's event intake. Discrete events carry the physical
/// output code; continuous events carry one channel's X/Y pair.
pub trait CoreIntake {
    fn send_key(&mut self, keycode: u16, pressed: bool, port: i32);

    fn send_motion(&mut self, channel: MotionChannel, x: f32, y: f32, port: i32);
}

/// Application-layer capabilities the hotkey dispatcher needs: UI entry
/// points, user notification, and the policy flags it queries synchronously.
pub trait FrontendShell {
    fn show_menu(&mut self);

    fn quit(&mut self);

    fn notify(&mut self, message: &str);

    fn is_hardcore_mode(&self) -> bool;

    fn is_rewind_enabled(&self) -> bool;
}

/// Save-state collaborator. All operations report success as a bool; the
/// dispatcher turns failures into notifications, never into errors.
pub trait SaveStateBridge {
    fn quick_save(&mut self) -> bool;

    fn quick_load(&mut self) -> bool;

    /// Persist current volatile save RAM (used before suspending).
    fn flush_save_ram(&mut self) -> bool;
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingIntake {
        pub keys: Vec<(u16, bool, i32)>,
        pub motion: Vec<(MotionChannel, f32, f32, i32)>,
    }

    impl CoreIntake for RecordingIntake {
        fn send_key(&mut self, keycode: u16, pressed: bool, port: i32) {
            self.keys.push((keycode, pressed, port));
        }

        fn send_motion(&mut self, channel: MotionChannel, x: f32, y: f32, port: i32) {
            self.motion.push((channel, x, y, port));
        }
    }

    #[derive(Debug, Default)]
    pub struct TestShell {
        pub menu_shown: u32,
        pub quit_calls: u32,
        pub notifications: Vec<String>,
        pub hardcore: bool,
        pub rewind_enabled: bool,
    }

    impl FrontendShell for TestShell {
        fn show_menu(&mut self) {
            self.menu_shown += 1;
        }

        fn quit(&mut self) {
            self.quit_calls += 1;
        }

        fn notify(&mut self, message: &str) {
            self.notifications.push(message.into());
        }

        fn is_hardcore_mode(&self) -> bool {
            self.hardcore
        }

        fn is_rewind_enabled(&self) -> bool {
            self.rewind_enabled
        }
    }

    #[derive(Debug, Default)]
    pub struct TestSaves {
        pub save_result: bool,
        pub load_result: bool,
        pub flush_result: bool,
        pub save_calls: u32,
        pub load_calls: u32,
        pub flush_calls: u32,
    }

    impl SaveStateBridge for TestSaves {
        fn quick_save(&mut self) -> bool {
            self.save_calls += 1;
            self.save_result
        }

        fn quick_load(&mut self) -> bool {
            self.load_calls += 1;
            self.load_result
        }

        fn flush_save_ram(&mut self) -> bool {
            self.flush_calls += 1;
            self.flush_result
        }
    }
}
