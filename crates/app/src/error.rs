//! Errors crossing the device port.

/// Failure talking to the device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),

    /// The device answered with a non-2xx status.
    #[error("device responded with HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for DeviceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
