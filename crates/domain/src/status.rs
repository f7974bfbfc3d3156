//! Status snapshot — the per-relay state bundle reported by `/api/status`.
//!
//! A snapshot is never mutated; every refresh replaces it wholesale. The four
//! sequences are index-aligned but the device is not trusted to keep them the
//! same length, so every accessor treats a missing or `null` entry as absent.

use serde::{Deserialize, Deserializer};

use crate::relay::{MAX_RELAYS, RelayId};

/// Device state as reported by one status poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusSnapshot {
    /// On/off state per relay; its length drives how many relays are bound.
    #[serde(default, deserialize_with = "flags")]
    pub states: Vec<bool>,
    /// Display label per relay.
    #[serde(default, deserialize_with = "nullable_seq")]
    pub labels: Vec<Option<String>>,
    /// Ping target per relay.
    #[serde(default, deserialize_with = "nullable_seq")]
    pub ips: Vec<Option<String>>,
    /// Reset-on-failure policy per relay.
    #[serde(default, deserialize_with = "flags")]
    pub reset: Vec<bool>,
}

/// Borrowed view of one relay's slice of a [`StatusSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayStatus<'a> {
    pub relay: RelayId,
    pub on: bool,
    pub label: Option<&'a str>,
    pub ip: Option<&'a str>,
    pub reset: bool,
}

impl StatusSnapshot {
    /// Decode a snapshot from the JSON body of `/api/status`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not a JSON object of
    /// the expected shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Number of relays reported in `states`.
    #[must_use]
    pub fn relay_count(&self) -> usize {
        self.states.len()
    }

    /// Whether relay `index` is on. Missing entries read as off.
    #[must_use]
    pub fn is_on(&self, index: usize) -> bool {
        self.states.get(index).copied().unwrap_or(false)
    }

    /// Non-empty label for relay `index`, if any.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        non_empty(&self.labels, index)
    }

    /// Non-empty ping target for relay `index`, if any.
    #[must_use]
    pub fn ip(&self, index: usize) -> Option<&str> {
        non_empty(&self.ips, index)
    }

    /// Whether the reset policy is set for relay `index`.
    #[must_use]
    pub fn reset_enabled(&self, index: usize) -> bool {
        self.reset.get(index).copied().unwrap_or(false)
    }

    /// Iterate over every relay in `states`, stopping at [`MAX_RELAYS`].
    pub fn relays(&self) -> impl Iterator<Item = RelayStatus<'_>> {
        RelayId::range(self.relay_count()).map(move |relay| {
            let i = relay.index();
            RelayStatus {
                relay,
                on: self.is_on(i),
                label: self.label(i),
                ip: self.ip(i),
                reset: self.reset_enabled(i),
            }
        })
    }

    /// Whether `states` lists more relays than a panel can address.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.relay_count() > MAX_RELAYS
    }
}

fn non_empty(values: &[Option<String>], index: usize) -> Option<&str> {
    values
        .get(index)
        .and_then(Option::as_deref)
        .filter(|value| !value.is_empty())
}

fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default())
}

fn flags<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<bool>> = nullable_seq(deserializer)?;
    Ok(raw.into_iter().map(|flag| flag.unwrap_or(false)).collect())
}
