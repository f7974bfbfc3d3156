//! View binding — maps a [`StatusSnapshot`] to declarative button updates.
//!
//! The binding decides everything (tone, label, dot); the applier in the
//! browser adapter only writes what it is told.

use std::fmt;

use crate::relay::RelayId;
use crate::status::{RelayStatus, StatusSnapshot};

/// Marker class present on every bound button.
pub const ACTIVE_CLASS: &str = "active";

/// Class that makes the monitoring dot visible.
pub const DOT_CLASS: &str = "has-dot";

/// CSS custom property carrying the dot color.
pub const DOT_COLOR_PROPERTY: &str = "--dot-color";

/// Every class the binding owns; all are cleared before an update is applied.
pub const MANAGED_CLASSES: [&str; 4] = ["green", "red", ACTIVE_CLASS, DOT_CLASS];

/// Button color reflecting the relay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    On,
    Off,
}

impl Tone {
    #[must_use]
    pub fn from_state(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// CSS class for the tone.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::On => "green",
            Self::Off => "red",
        }
    }
}

/// Color of the monitoring dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotColor {
    /// Relay on with a reset policy armed.
    Attention,
    /// Relay on and pinged.
    Monitored,
    /// Relay off; the target is not being watched.
    Neutral,
}

impl DotColor {
    /// Value written to [`DOT_COLOR_PROPERTY`].
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Attention => "yellow",
            Self::Monitored => "blue",
            Self::Neutral => "grey",
        }
    }
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

/// Decide the dot for one relay. First match wins:
/// reset + ip → attention/neutral, ip only → monitored/neutral, else none.
#[must_use]
pub fn dot_policy(on: bool, has_ip: bool, reset: bool) -> Option<DotColor> {
    if !has_ip {
        return None;
    }
    let lit = if reset {
        DotColor::Attention
    } else {
        DotColor::Monitored
    };
    Some(if on { lit } else { DotColor::Neutral })
}

/// Everything the applier needs to restyle one relay button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonUpdate {
    pub relay: RelayId,
    pub tone: Tone,
    /// New label, or `None` to keep the one currently displayed.
    pub label: Option<String>,
    pub dot: Option<DotColor>,
}

impl ButtonUpdate {
    /// Derive the update for one relay.
    #[must_use]
    pub fn from_status(status: &RelayStatus<'_>) -> Self {
        Self {
            relay: status.relay,
            tone: Tone::from_state(status.on),
            label: status.label.map(str::to_string),
            dot: dot_policy(status.on, status.ip.is_some(), status.reset),
        }
    }

    /// Classes to add once [`MANAGED_CLASSES`] have been removed.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.tone.class(), ACTIVE_CLASS];
        if self.dot.is_some() {
            classes.push(DOT_CLASS);
        }
        classes
    }
}

/// Map a snapshot to one update per relay listed in `states`, in index order.
#[must_use]
pub fn bind_status(snapshot: &StatusSnapshot) -> Vec<ButtonUpdate> {
    snapshot
        .relays()
        .map(|status| ButtonUpdate::from_status(&status))
        .collect()
}
