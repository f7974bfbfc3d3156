//! Status service — fetch a snapshot and bind it to the relay buttons.

use relayboard_domain::relay::RelayId;
use relayboard_domain::status::StatusSnapshot;
use relayboard_domain::view::bind_status;

use crate::error::DeviceError;
use crate::ports::{DeviceApi, RelayView};

/// Outcome of one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Buttons restyled.
    pub updated: usize,
    /// Relays in the snapshot with no button on the page.
    pub missing: Vec<RelayId>,
}

/// Keeps the relay buttons in sync with the device.
pub struct StatusService<A, V> {
    api: A,
    view: V,
}

impl<A: DeviceApi, V: RelayView> StatusService<A, V> {
    /// Create a new service bound to a device and a button grid.
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Fetch `/api/status` and restyle every button it mentions.
    ///
    /// # Errors
    ///
    /// Returns the [`DeviceError`] of a failed fetch or decode. The buttons
    /// are left untouched in that case.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_status(&self) -> Result<RefreshReport, DeviceError> {
        let snapshot = self.api.fetch_status().await?;
        Ok(self.apply(&snapshot))
    }

    /// Bind an already fetched snapshot.
    pub fn apply(&self, snapshot: &StatusSnapshot) -> RefreshReport {
        if snapshot.is_truncated() {
            tracing::warn!(
                relays = snapshot.relay_count(),
                "status lists more relays than the panel addresses"
            );
        }

        let mut report = RefreshReport::default();
        for update in bind_status(snapshot) {
            if self.view.apply_button(&update) {
                report.updated += 1;
            } else {
                tracing::debug!(relay = %update.relay, "no button for relay, skipping");
                report.missing.push(update.relay);
            }
        }
        report
    }
}
