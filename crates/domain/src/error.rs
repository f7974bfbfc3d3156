//! Common error types used across the workspace.

/// A value failed a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text is not a relay index.
    #[error("invalid relay index {0:?}")]
    InvalidRelayIndex(String),

    /// The relay index is beyond what the panel addresses.
    #[error("relay index {index} out of range (max {max})")]
    RelayOutOfRange { index: usize, max: usize },
}
