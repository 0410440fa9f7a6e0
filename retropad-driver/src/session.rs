//! The per-emulation-session object tying the translation components
//! together. Each session owns its own state; multiple sessions never
//! interfere.

use crate::config::SessionOptions;
use crate::config::input::{ControllerIdentity, HotkeyAction, HotkeyBinding, PortAssignment};
use crate::device::DeviceInfo;
use crate::dispatch::HotkeyDispatcher;
use crate::frontend::{CoreIntake, FrontendShell, SaveStateBridge};
use crate::hotkeys::HotkeyDetector;
use crate::mapping::{MappingStore, MappingTable};
use crate::motion::{MotionEvent, MotionProcessor};
use crate::ports::PortResolver;
use rustc_hash::FxHashMap;

/// Everything the configuration store supplies for one session, replaced
/// wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTables {
    /// Ordered port assignments; the first entry is the player-1 controller.
    pub controller_order: Vec<PortAssignment>,
    pub mappings: FxHashMap<ControllerIdentity, MappingTable>,
    pub hotkeys: Vec<HotkeyBinding>,
}

pub struct InputSession<C, S, V> {
    core: C,
    store: MappingStore,
    ports: PortResolver,
    motion: MotionProcessor,
    hotkeys: HotkeyDetector,
    dispatcher: HotkeyDispatcher<S, V>,
    options: SessionOptions,
}

impl<C: CoreIntake, S: FrontendShell, V: SaveStateBridge> InputSession<C, S, V> {
    pub fn new(core: C, shell: S, saves: V, options: SessionOptions) -> Self {
        let mut hotkeys = HotkeyDetector::new();
        hotkeys.set_limit_to_player1(options.limit_hotkeys_to_player1);

        Self {
            core,
            store: MappingStore::new(),
            ports: PortResolver::new(),
            motion: MotionProcessor::new(),
            hotkeys,
            dispatcher: HotkeyDispatcher::new(shell, saves),
            options,
        }
    }

    /// Replaces every table in one step: port order, mapping tables, hotkey
    /// bindings, the derived gameplay-mapped button sets, and the player-1
    /// identity (first entry of the controller order).
    pub fn apply_tables(&mut self, tables: &InputTables) {
        self.ports.set_order(tables.controller_order.iter().cloned());
        self.store.set_all(tables.mappings.clone());
        self.motion.clear();

        self.hotkeys.set_bindings(&tables.hotkeys);
        self.hotkeys.set_mapped_buttons(self.store.all_mapped_button_codes());
        self.hotkeys.set_player1_controller(
            tables.controller_order.first().map(|assignment| assignment.controller.clone()),
        );

        log::debug!(
            "Input tables applied: {} port assignments, {} device mappings, {} hotkeys",
            tables.controller_order.len(),
            tables.mappings.len(),
            tables.hotkeys.len()
        );
    }

    /// Picks up tables published from another thread (a settings screen)
    /// and applies them. Call once per event-loop iteration; the
    /// steady-state cost is a single atomic load.
    pub fn sync_tables(&mut self, slot: &mut crate::swap::SharedSwap<InputTables>) -> bool {
        if !slot.check_for_updates() {
            return false;
        }

        self.apply_tables(slot.get());
        true
    }

    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
        self.hotkeys.set_limit_to_player1(options.limit_hotkeys_to_player1);
    }

    /// Handles a physical key press. Returns true when the event was
    /// consumed (a hotkey dispatched or the key is filtered for this
    /// platform); otherwise the translated event has been sent to the core.
    pub fn key_down(&mut self, device: &DeviceInfo, keycode: u16) -> bool {
        let identity = device.identity();

        if let Some(action) = self.hotkeys.on_key_down(keycode, Some(&identity)) {
            if self.dispatcher.dispatch(action, &mut self.hotkeys) {
                return true;
            }
        }

        if self.options.shoulders.filters(keycode) {
            return true;
        }

        let translated = self.store.translate_button(&identity, keycode);
        let port = self.ports.port_for(&identity, device.fallback_port());
        self.core.send_key(translated, true, port);
        false
    }

    /// Handles a physical key release. Continuous-hold actions stop once
    /// their chord is no longer fully held.
    pub fn key_up(&mut self, device: &DeviceInfo, keycode: u16) -> bool {
        self.hotkeys.on_key_up(keycode);

        if self.dispatcher.is_fast_forwarding()
            && !self.hotkeys.is_active(HotkeyAction::FastForward)
        {
            self.dispatcher.stop_fast_forward();
        }
        if self.dispatcher.is_rewinding() && !self.hotkeys.is_active(HotkeyAction::Rewind) {
            self.dispatcher.stop_rewind();
        }

        if self.options.shoulders.filters(keycode) {
            return true;
        }

        let identity = device.identity();
        let translated = self.store.translate_button(&identity, keycode);
        let port = self.ports.port_for(&identity, device.fallback_port());
        self.core.send_key(translated, false, port);
        false
    }

    /// Handles one continuous motion sample. Synthetic press/release events
    /// produced by analog edge detection are delivered through the discrete
    /// intake path. Returns true when the event was consumed.
    pub fn handle_motion(&mut self, event: &MotionEvent<'_>) -> bool {
        let events = self.motion.process(
            event,
            &self.store,
            &self.ports,
            &self.options,
            &mut self.core,
        );

        let mut consumed = event.device.analog_capable;
        for synthetic in events {
            self.core.send_key(synthetic.keycode, synthetic.pressed, synthetic.port);
            consumed = true;
        }
        consumed
    }

    #[must_use]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    #[must_use]
    pub fn ports(&self) -> &PortResolver {
        &self.ports
    }

    #[must_use]
    pub fn detector(&self) -> &HotkeyDetector {
        &self.hotkeys
    }

    #[must_use]
    pub fn dispatcher(&self) -> &HotkeyDispatcher<S, V> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut HotkeyDispatcher<S, V> {
        &mut self.dispatcher
    }

    #[must_use]
    pub fn core(&self) -> &C {
        &self.core
    }
}
