//! HTTP client wrapping `gloo-net` for calls to the relay board.

use std::future::Future;

use gloo_net::http::{Request, Response};
use relayboard_app::error::DeviceError;
use relayboard_app::ports::DeviceApi;
use relayboard_domain::endpoint::Endpoint;
use relayboard_domain::relay::RelayId;
use relayboard_domain::status::StatusSnapshot;

/// Map a `gloo-net` failure onto the device port's error.
fn device_error(err: gloo_net::Error) -> DeviceError {
    match err {
        gloo_net::Error::SerdeError(err) => DeviceError::Decode(err.to_string()),
        other => DeviceError::Transport(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, DeviceError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(DeviceError::Status(resp.status()))
    }
}

async fn get(url: &str) -> Result<Response, DeviceError> {
    let resp = Request::get(url).send().await.map_err(device_error)?;
    check_response(resp)
}

/// [`DeviceApi`] over `fetch`, rooted at the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    base_url: String,
}

impl HttpDeviceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl DeviceApi for HttpDeviceApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DeviceError>> {
        let url = Endpoint::Status.url(&self.base_url);
        async move {
            let body = get(&url).await?.text().await.map_err(device_error)?;
            Ok(StatusSnapshot::from_json(&body)?)
        }
    }

    fn toggle_relay(&self, relay: RelayId) -> impl Future<Output = Result<(), DeviceError>> {
        let url = Endpoint::Toggle(relay).url(&self.base_url);
        async move {
            get(&url).await?;
            Ok(())
        }
    }

    fn clear_log(&self) -> impl Future<Output = Result<(), DeviceError>> {
        let url = Endpoint::ClearLog.url(&self.base_url);
        async move {
            get(&url).await?;
            Ok(())
        }
    }
}
