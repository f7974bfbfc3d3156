//! Device HTTP endpoints used by the panel.

use crate::relay::RelayId;

/// A request target on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/status`
    Status,
    /// `GET /toggle?id=<i>`
    Toggle(RelayId),
    /// `GET /clearlog`
    ClearLog,
    /// `/`, the relay page.
    Home,
    /// `/reboot`, the page shown while the device restarts.
    Reboot,
}

impl Endpoint {
    /// Path and query relative to the device root.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Status => "/api/status".to_string(),
            Self::Toggle(relay) => format!("/toggle?id={relay}"),
            Self::ClearLog => "/clearlog".to_string(),
            Self::Home => "/".to_string(),
            Self::Reboot => "/reboot".to_string(),
        }
    }

    /// Absolute URL under `base`; an empty base keeps the path same-origin.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Whether the page at `pathname` (as in `location.pathname`) is this
    /// endpoint. A trailing slash is ignored.
    #[must_use]
    pub fn is_page(self, pathname: &str) -> bool {
        self.path().trim_end_matches('/') == pathname.trim_end_matches('/')
    }
}
