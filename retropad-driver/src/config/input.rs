use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisDirection {
    Positive,
    Negative,
}

impl Display for AxisDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "+"),
            Self::Negative => write!(f, "-"),
        }
    }
}

impl FromStr for AxisDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Positive),
            "-" => Ok(Self::Negative),
            _ => Err(format!("Invalid AxisDirection string: {s}")),
        }
    }
}

/// One bindable physical input: a discrete button, or one signed half of an
/// analog axis. The two halves of an axis are distinct sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputSource {
    Button { code: u16 },
    Axis { axis: u16, direction: AxisDirection },
}

impl Display for InputSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Button { code } => write!(f, "Button {code}"),
            Self::Axis { axis, direction } => write!(f, "Axis {axis} {direction}"),
        }
    }
}

impl FromStr for InputSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err_fn = || format!("Invalid input source string: {s}");

        let mut split = s.split_ascii_whitespace();
        let Some(input_type) = split.next() else {
            return Err(err_fn());
        };

        let Some(idx) = split.next().and_then(|idx| idx.parse().ok()) else {
            return Err(err_fn());
        };

        match input_type {
            "Button" | "button" => Ok(Self::Button { code: idx }),
            "Axis" | "axis" => {
                let Some(direction) = split.next().and_then(|direction| direction.parse().ok())
                else {
                    return Err(err_fn());
                };

                Ok(Self::Axis { axis: idx, direction })
            }
            _ => Err(err_fn()),
        }
    }
}

/// Virtual console buttons, independent of any physical controller layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RetroButton {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    Start,
    Select,
    L,
    R,
    L2,
    R2,
    L3,
    R3,
}

/// Stable identity for a physical controller, rendered as a single composite
/// key. Two devices reporting the same vendor/product/descriptor are the same
/// controller for mapping, port, and hotkey purposes, across reconnects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerIdentity(String);

impl ControllerIdentity {
    #[must_use]
    pub fn new(vendor_id: u16, product_id: u16, descriptor: &str) -> Self {
        Self(format!("{vendor_id:04x}:{product_id:04x}:{descriptor}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ControllerIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    OpenMenu,
    QuickSave,
    QuickLoad,
    FastForward,
    Rewind,
    Suspend,
}

impl Display for HotkeyAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OpenMenu => "OpenMenu",
            Self::QuickSave => "QuickSave",
            Self::QuickLoad => "QuickLoad",
            Self::FastForward => "FastForward",
            Self::Rewind => "Rewind",
            Self::Suspend => "Suspend",
        };
        write!(f, "{s}")
    }
}

impl FromStr for HotkeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OpenMenu" => Ok(Self::OpenMenu),
            "QuickSave" => Ok(Self::QuickSave),
            "QuickLoad" => Ok(Self::QuickLoad),
            "FastForward" => Ok(Self::FastForward),
            "Rewind" => Ok(Self::Rewind),
            "Suspend" => Ok(Self::Suspend),
            _ => Err(format!("Invalid hotkey action string: {s}")),
        }
    }
}

/// A configured hotkey: the action, the chord of physical key codes that must
/// be simultaneously held, and an optional controller restriction (`None`
/// means any controller). An empty chord never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub action: HotkeyAction,
    pub chord: Vec<u16>,
    pub controller: Option<ControllerIdentity>,
    pub enabled: bool,
}

/// Explicit controller-to-port assignment. Negative ports mark a slot as
/// disabled for continuous motion forwarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortAssignment {
    pub controller: ControllerIdentity,
    pub port: i32,
}
