//! Relay service — toggle a relay and refresh once the device has acted.

use std::rc::Rc;
use std::time::Duration;

use relayboard_domain::relay::RelayId;

use crate::ports::{DeviceApi, RelayView, Scheduler};
use crate::services::status_service::StatusService;

/// Sends toggle requests and schedules the follow-up refresh.
pub struct RelayService<A, V, S> {
    api: A,
    status: Rc<StatusService<A, V>>,
    scheduler: S,
    refresh_delay: Duration,
}

impl<A, V, S> RelayService<A, V, S>
where
    A: DeviceApi + Clone + 'static,
    V: RelayView + 'static,
    S: Scheduler,
{
    /// Create a new service; `refresh_delay` is how long to wait after
    /// issuing a toggle before re-reading the status.
    pub fn new(
        api: A,
        status: Rc<StatusService<A, V>>,
        scheduler: S,
        refresh_delay: Duration,
    ) -> Self {
        Self {
            api,
            status,
            scheduler,
            refresh_delay,
        }
    }

    /// Fire `GET /toggle?id=<relay>` without waiting for it, and request a
    /// status refresh `refresh_delay` after issuing it.
    ///
    /// A failed toggle request is logged and dropped; the refresh still runs.
    #[tracing::instrument(skip(self))]
    pub fn toggle_relay(&self, relay: RelayId) {
        let api = self.api.clone();
        self.scheduler.spawn(Box::pin(async move {
            if let Err(err) = api.toggle_relay(relay).await {
                tracing::warn!(%relay, error = %err, "toggle request failed");
            }
        }));
        self.request_refresh();
    }

    /// Schedule one status refresh after the configured delay.
    ///
    /// Refreshes are never coalesced or cancelled; each request produces
    /// exactly one fetch and the last one to land wins.
    pub fn request_refresh(&self) {
        let status = Rc::clone(&self.status);
        self.scheduler.spawn_after(
            self.refresh_delay,
            Box::pin(async move {
                if let Err(err) = status.refresh_status().await {
                    tracing::warn!(error = %err, "delayed status refresh failed");
                }
            }),
        );
    }
}
