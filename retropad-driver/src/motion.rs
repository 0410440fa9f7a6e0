//! Converts continuous analog samples into synthetic discrete events for
//! mapped analog directions, and forwards the d-pad and stick channels to
//! the emulator core.

use crate::config::SessionOptions;
use crate::config::input::{AxisDirection, ControllerIdentity, InputSource};
use crate::frontend::CoreIntake;
use crate::keys::{axis, retro_button_keycode};
use crate::mapping::MappingStore;
use crate::ports::PortResolver;
use rustc_hash::{FxHashMap, FxHashSet};
use std::mem;

/// Magnitude a signed axis value must exceed, in the configured direction,
/// for an analog direction to count as pressed. Shared by both signs.
pub const ANALOG_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionChannel {
    Dpad,
    AnalogLeft,
    AnalogRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisValue {
    pub axis: u16,
    pub value: f32,
}

/// One continuous motion sample from a device: every axis the host reported,
/// in host axis ids. Axes not present read as 0.
#[derive(Debug, Clone, Copy)]
pub struct MotionEvent<'a> {
    pub device: &'a crate::device::DeviceInfo,
    pub axes: &'a [AxisValue],
}

impl MotionEvent<'_> {
    #[must_use]
    pub fn axis_value(&self, axis: u16) -> f32 {
        self.axes.iter().find(|entry| entry.axis == axis).map_or(0.0, |entry| entry.value)
    }
}

/// A discrete press/release synthesized from an analog direction crossing
/// the threshold. Carries the translated output code and resolved port; it
/// is delivered through the same intake path as real button events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticKeyEvent {
    pub keycode: u16,
    pub pressed: bool,
    pub port: i32,
}

#[derive(Debug, Clone, Default)]
pub struct MotionProcessor {
    active_directions: FxHashMap<ControllerIdentity, FxHashSet<(u16, AxisDirection)>>,
    next_active: FxHashSet<(u16, AxisDirection)>,
    events: Vec<SyntheticKeyEvent>,
}

impl MotionProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all edge-detection state. Call when mapping tables are replaced
    /// so stale directions cannot produce phantom releases.
    pub fn clear(&mut self) {
        self.active_directions.clear();
    }

    /// Processes one motion sample. Synthetic press/release events for
    /// mapped analog directions are returned; continuous d-pad and stick
    /// channels are forwarded to `core` (skipped entirely for non-analog
    /// devices and disabled ports).
    pub fn process<'a, C: CoreIntake>(
        &'a mut self,
        event: &MotionEvent<'_>,
        store: &MappingStore,
        ports: &PortResolver,
        options: &SessionOptions,
        core: &mut C,
    ) -> &'a [SyntheticKeyEvent] {
        let identity = event.device.identity();
        let port = ports.port_for(&identity, event.device.fallback_port());

        self.events.clear();

        if let Some(table) = store.table_for(&identity) {
            let current = self.active_directions.entry(identity).or_default();
            let next = &mut self.next_active;
            next.clear();

            for (&source, &button) in table.iter() {
                let InputSource::Axis { axis, direction } = source else {
                    continue;
                };

                let value = event.axis_value(axis);
                let pressed = match direction {
                    AxisDirection::Positive => value > ANALOG_THRESHOLD,
                    AxisDirection::Negative => value < -ANALOG_THRESHOLD,
                };

                if pressed {
                    next.insert((axis, direction));
                    if !current.contains(&(axis, direction)) {
                        self.events.push(SyntheticKeyEvent {
                            keycode: retro_button_keycode(button),
                            pressed: true,
                            port,
                        });
                    }
                }
            }

            for &(axis, direction) in current.iter() {
                if next.contains(&(axis, direction)) {
                    continue;
                }

                // Direction may have been unmapped since it was pressed
                let Some(&button) = table.get(&InputSource::Axis { axis, direction }) else {
                    continue;
                };

                self.events.push(SyntheticKeyEvent {
                    keycode: retro_button_keycode(button),
                    pressed: false,
                    port,
                });
            }

            mem::swap(current, next);
        }

        if event.device.analog_capable && port >= 0 {
            forward_channels(event, options, port, core);
        }

        &self.events
    }
}

fn forward_channels<C: CoreIntake>(
    event: &MotionEvent<'_>,
    options: &SessionOptions,
    port: i32,
    core: &mut C,
) {
    let hat = (event.axis_value(axis::HAT_X), event.axis_value(axis::HAT_Y));
    let left = (event.axis_value(axis::X), event.axis_value(axis::Y));
    let right = (event.axis_value(axis::Z), event.axis_value(axis::RZ));

    // Cross-wirings substitute per axis, and only the larger magnitude
    // wins; X and Y are decided independently.
    let dpad_out = if options.analog_as_dpad {
        (larger_magnitude(hat.0, left.0), larger_magnitude(hat.1, left.1))
    } else {
        hat
    };
    let left_out = if options.dpad_as_analog {
        (larger_magnitude(left.0, hat.0), larger_magnitude(left.1, hat.1))
    } else {
        left
    };

    core.send_motion(MotionChannel::Dpad, dpad_out.0, dpad_out.1, port);
    core.send_motion(MotionChannel::AnalogLeft, left_out.0, left_out.1, port);
    core.send_motion(MotionChannel::AnalogRight, right.0, right.1, port);
}

fn larger_magnitude(base: f32, other: f32) -> f32 {
    if other.abs() > base.abs() { other } else { base }
}
