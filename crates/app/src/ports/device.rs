//! Device port — the HTTP endpoints served by the relay board.

use std::future::Future;
use std::rc::Rc;

use relayboard_domain::relay::RelayId;
use relayboard_domain::status::StatusSnapshot;

use crate::error::DeviceError;

/// Requests the panel sends to the device.
pub trait DeviceApi {
    /// `GET /api/status`, decoded.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DeviceError>>;

    /// `GET /toggle?id=<relay>`. The response body carries nothing useful.
    fn toggle_relay(&self, relay: RelayId) -> impl Future<Output = Result<(), DeviceError>>;

    /// `GET /clearlog`. A non-2xx answer is reported as [`DeviceError::Status`].
    fn clear_log(&self) -> impl Future<Output = Result<(), DeviceError>>;
}

impl<T: DeviceApi> DeviceApi for Rc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DeviceError>> {
        (**self).fetch_status()
    }

    fn toggle_relay(&self, relay: RelayId) -> impl Future<Output = Result<(), DeviceError>> {
        (**self).toggle_relay(relay)
    }

    fn clear_log(&self) -> impl Future<Output = Result<(), DeviceError>> {
        (**self).clear_log()
    }
}
