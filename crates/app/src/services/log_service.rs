//! Log service — clear the device log after confirmation.

use crate::error::DeviceError;
use crate::ports::{DeviceApi, Dialogs, Navigator};

/// Question asked before clearing.
pub const CLEAR_LOG_PROMPT: &str = "Are you sure you want to clear the log?";

/// Alert shown when the device refuses.
pub const CLEAR_LOG_FAILED: &str = "Failed to clear log.";

/// What a clear-log attempt ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearLogOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The device cleared the log and the page was reloaded.
    Cleared,
    /// The device answered with this non-2xx status; the user was alerted.
    Rejected(u16),
}

pub struct LogService<A, D, N> {
    api: A,
    dialogs: D,
    navigator: N,
}

impl<A: DeviceApi, D: Dialogs, N: Navigator> LogService<A, D, N> {
    pub fn new(api: A, dialogs: D, navigator: N) -> Self {
        Self {
            api,
            dialogs,
            navigator,
        }
    }

    /// Ask for confirmation, then `GET /clearlog`. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Transport`] or [`DeviceError::Decode`] when the
    /// request itself fails; a non-2xx answer is an `Ok(Rejected)` outcome.
    #[tracing::instrument(skip(self))]
    pub async fn clear_log(&self) -> Result<ClearLogOutcome, DeviceError> {
        if !self.dialogs.confirm(CLEAR_LOG_PROMPT) {
            return Ok(ClearLogOutcome::Cancelled);
        }
        match self.api.clear_log().await {
            Ok(()) => {
                self.navigator.reload();
                Ok(ClearLogOutcome::Cleared)
            }
            Err(DeviceError::Status(code)) => {
                tracing::warn!(code, "device refused to clear the log");
                self.dialogs.alert(CLEAR_LOG_FAILED);
                Ok(ClearLogOutcome::Rejected(code))
            }
            Err(err) => Err(err),
        }
    }
}
