//! Input-translation core for the retropad front end: turns raw controller
//! events into virtual console button events routed to the right player
//! port, and detects hotkey chords that drive front-end commands.

pub mod config;
pub mod device;
pub mod dispatch;
pub mod frontend;
pub mod hotkeys;
pub mod keys;
pub mod mapping;
pub mod motion;
pub mod ports;
pub mod session;
pub mod swap;

pub use config::SessionOptions;
pub use config::input::{
    AxisDirection, ControllerIdentity, HotkeyAction, HotkeyBinding, InputSource, PortAssignment,
    RetroButton,
};
pub use device::DeviceInfo;
pub use dispatch::HotkeyDispatcher;
pub use frontend::{CoreIntake, FrontendShell, SaveStateBridge};
pub use hotkeys::{HotkeyDetector, MAX_CHORD_LEN, is_hotkey_key};
pub use keys::ShoulderButtons;
pub use mapping::{MappingStore, MappingTable};
pub use motion::{
    ANALOG_THRESHOLD, AxisValue, MotionChannel, MotionEvent, MotionProcessor, SyntheticKeyEvent,
};
pub use ports::PortResolver;
pub use session::{InputSession, InputTables};
pub use swap::SharedSwap;
