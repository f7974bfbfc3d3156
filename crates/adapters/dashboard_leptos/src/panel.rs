//! Composition root — wires the browser adapters into the app services.

use std::cell::OnceCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::task::spawn_local;
use relayboard_app::config::PanelConfig;
use relayboard_app::services::field_service::FieldService;
use relayboard_app::services::log_service::LogService;
use relayboard_app::services::navigation_service::NavigationService;
use relayboard_app::services::relay_service::RelayService;
use relayboard_app::services::status_service::StatusService;
use relayboard_app::services::upload_service::{UploadOutcome, UploadService};
use relayboard_domain::relay::RelayId;
use web_sys::Element;

use crate::api::HttpDeviceApi;
use crate::dom::{BrowserWindow, DomForm, DomRelayView, DomUpload, element_by_id};
use crate::scheduler::BrowserScheduler;

/// Id of the optional `<script type="application/json">` configuration block.
const CONFIG_ELEMENT_ID: &str = "relayboard-config";

type Api = Rc<HttpDeviceApi>;

thread_local! {
    static PANEL: OnceCell<Rc<Panel>> = const { OnceCell::new() };
}

/// Every service the page needs, bound to the browser.
pub struct Panel {
    config: PanelConfig,
    status: Rc<StatusService<Api, DomRelayView>>,
    relays: RelayService<Api, DomRelayView, BrowserScheduler>,
    log: LogService<Api, BrowserWindow, BrowserWindow>,
    upload: UploadService<BrowserWindow, DomUpload>,
    fields: FieldService<DomForm>,
    navigation: NavigationService<BrowserWindow, BrowserScheduler>,
}

impl Panel {
    pub fn new(config: PanelConfig) -> Self {
        let api = Rc::new(HttpDeviceApi::new(config.base_url.clone()));
        let status = Rc::new(StatusService::new(Rc::clone(&api), DomRelayView));
        let relays = RelayService::new(
            Rc::clone(&api),
            Rc::clone(&status),
            BrowserScheduler,
            config.refresh_delay(),
        );
        let log = LogService::new(api, BrowserWindow, BrowserWindow);
        let upload = UploadService::new(BrowserWindow, DomUpload);
        let fields = FieldService::new(DomForm);
        let navigation = NavigationService::new(BrowserWindow, BrowserScheduler, &config.base_url);

        Self {
            config,
            status,
            relays,
            log,
            upload,
            fields,
            navigation,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Fetch the status now; failures are logged and left to the next refresh.
    pub fn refresh_status(&self) {
        let status = Rc::clone(&self.status);
        spawn_local(async move {
            match status.refresh_status().await {
                Ok(report) if !report.missing.is_empty() => {
                    leptos::logging::log!(
                        "status refreshed: {} buttons updated, none for relays {:?}",
                        report.updated,
                        report.missing
                    );
                }
                Ok(_) => {}
                Err(err) => leptos::logging::warn!("status refresh failed: {err}"),
            }
        });
    }

    pub fn toggle_relay(&self, relay: RelayId) {
        self.relays.toggle_relay(relay);
    }

    pub fn clear_log(self: &Rc<Self>) {
        let panel = Rc::clone(self);
        spawn_local(async move {
            match panel.log.clear_log().await {
                Ok(outcome) => leptos::logging::log!("clear log: {outcome:?}"),
                Err(err) => leptos::logging::warn!("clear log request failed: {err}"),
            }
        });
    }

    pub fn trigger_upload(&self) {
        log_upload(self.upload.trigger_upload());
    }

    pub fn upload_selected(&self) {
        log_upload(self.upload.on_file_selected());
    }

    pub fn sync_ping_fields(&self, relay: RelayId) {
        self.fields.sync_ping_fields(relay);
    }

    pub fn sync_schedule_fields(&self) {
        self.fields.sync_schedule_fields();
    }

    /// Load-time pass over every configured relay plus the schedule.
    pub fn sync_all_fields(&self) {
        self.fields.sync_all(self.config.relays());
    }

    /// Go back to the relay page after `delay`, or the configured default.
    pub fn return_home_after(&self, delay: Option<Duration>) {
        let delay = delay.unwrap_or_else(|| self.config.home_redirect_delay());
        self.navigation.return_home_after(delay);
    }

    /// Start the return home when loaded on the reboot page.
    pub fn return_home_if_rebooting(&self, pathname: &str) {
        self.navigation
            .return_home_if_rebooting(pathname, self.config.home_redirect_delay());
    }
}

fn log_upload(outcome: UploadOutcome) {
    match outcome {
        UploadOutcome::Unavailable => {
            leptos::logging::warn!("config upload: page has no upload form");
        }
        UploadOutcome::NothingSelected => {}
        other => leptos::logging::log!("config upload: {other:?}"),
    }
}

/// Read the embedded configuration block, falling back to defaults.
pub fn load_config() -> PanelConfig {
    let source = element_by_id::<Element>(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    PanelConfig::load(source.as_deref()).unwrap_or_else(|err| {
        leptos::logging::warn!("ignoring panel configuration: {err}");
        PanelConfig::default()
    })
}

/// Make `panel` the page-wide instance. The first install wins.
pub fn install(panel: Panel) -> Rc<Panel> {
    PANEL.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(panel))))
}

/// The installed panel, if the module has started.
pub fn current() -> Option<Rc<Panel>> {
    let panel = PANEL.with(|cell| cell.get().cloned());
    if panel.is_none() {
        leptos::logging::warn!("relayboard called before the panel started");
    }
    panel
}
