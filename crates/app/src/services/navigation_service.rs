//! Navigation service — return to the relay page after a reboot.

use std::time::Duration;

use relayboard_domain::endpoint::Endpoint;

use crate::ports::{Navigator, Scheduler};

pub struct NavigationService<N, S> {
    navigator: N,
    scheduler: S,
    home_url: String,
}

impl<N, S> NavigationService<N, S>
where
    N: Navigator + Clone + 'static,
    S: Scheduler,
{
    pub fn new(navigator: N, scheduler: S, base_url: &str) -> Self {
        Self {
            navigator,
            scheduler,
            home_url: Endpoint::Home.url(base_url),
        }
    }

    /// Navigate to `/` once `delay` has passed, giving the device time to
    /// come back up.
    #[tracing::instrument(skip(self))]
    pub fn return_home_after(&self, delay: Duration) {
        let navigator = self.navigator.clone();
        let url = self.home_url.clone();
        self.scheduler.spawn_after(
            delay,
            Box::pin(async move {
                navigator.navigate(&url);
            }),
        );
    }

    /// Schedule the return home when `pathname` is the reboot page.
    ///
    /// The reboot page asks for the redirect from an inline script that runs
    /// before the module is loaded, so the panel checks on start instead.
    /// Returns whether a redirect was scheduled.
    #[tracing::instrument(skip(self))]
    pub fn return_home_if_rebooting(&self, pathname: &str, delay: Duration) -> bool {
        if !Endpoint::Reboot.is_page(pathname) {
            return false;
        }
        tracing::debug!("device is rebooting, returning home");
        self.return_home_after(delay);
        true
    }
}
