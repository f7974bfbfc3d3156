//! Relay identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of relays the stock board exposes.
pub const DEFAULT_RELAY_COUNT: usize = 6;

/// Upper bound on relays a single panel addresses.
pub const MAX_RELAYS: usize = 32;

/// Zero-based index of a relay on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelayId(usize);

impl RelayId {
    /// Wrap an index, rejecting anything at or beyond [`MAX_RELAYS`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RelayOutOfRange`] for indices `>= MAX_RELAYS`.
    pub fn new(index: usize) -> Result<Self, ValidationError> {
        if index >= MAX_RELAYS {
            return Err(ValidationError::RelayOutOfRange {
                index,
                max: MAX_RELAYS,
            });
        }
        Ok(Self(index))
    }

    /// The raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Iterate over the first `count` relays, clamped to [`MAX_RELAYS`].
    pub fn range(count: usize) -> impl Iterator<Item = RelayId> {
        (0..count.min(MAX_RELAYS)).map(Self)
    }

    /// Element id of the relay's button (`relay<i>`).
    #[must_use]
    pub fn button_dom_id(self) -> String {
        format!("relay{}", self.0)
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RelayId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ValidationError::InvalidRelayIndex(s.to_string()))?;
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_index_below_max() {
        let id = RelayId::new(5).unwrap();
        assert_eq!(id.index(), 5);
    }

    #[test]
    fn should_reject_index_at_max() {
        let result = RelayId::new(MAX_RELAYS);
        assert_eq!(
            result,
            Err(ValidationError::RelayOutOfRange {
                index: MAX_RELAYS,
                max: MAX_RELAYS
            })
        );
    }

    #[test]
    fn should_parse_from_trimmed_text() {
        let id: RelayId = " 2 ".parse().unwrap();
        assert_eq!(id.index(), 2);
    }

    #[test]
    fn should_return_error_when_parsing_negative_index() {
        let result = "-1".parse::<RelayId>();
        assert!(matches!(result, Err(ValidationError::InvalidRelayIndex(_))));
    }

    #[test]
    fn should_format_button_dom_id() {
        assert_eq!(RelayId::new(3).unwrap().button_dom_id(), "relay3");
    }

    #[test]
    fn should_clamp_range_to_max() {
        assert_eq!(RelayId::range(DEFAULT_RELAY_COUNT).count(), 6);
        assert_eq!(RelayId::range(1000).count(), MAX_RELAYS);
    }

    #[test]
    fn should_return_error_when_parsing_fractional_index() {
        let result = "2.5".parse::<RelayId>();
        assert_eq!(
            result,
            Err(ValidationError::InvalidRelayIndex("2.5".to_string()))
        );
    }

    #[test]
    fn should_return_out_of_range_when_parsed_index_too_large() {
        let result = "32".parse::<RelayId>();
        assert!(matches!(result, Err(ValidationError::RelayOutOfRange { .. })));
    }
}
