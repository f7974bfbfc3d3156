//! Browser entry points for the relay board control panel.
//!
//! The device renders the page; this module binds to its element ids. The
//! exported functions keep the names the page's inline handlers call
//! (`onclick='toggleRelay(2)'` and friends) and are also published on
//! `window` so those handlers can reach them.

use std::rc::Rc;
use std::time::Duration;

use relayboard_app::ports::MAX_TIMER_MS;
use relayboard_domain::error::ValidationError;
use relayboard_domain::form::FieldId;
use relayboard_domain::relay::RelayId;
use wasm_bindgen::prelude::*;
use web_sys::{DocumentReadyState, HtmlElement};

pub mod api;
mod dom;
mod globals;
mod panel;
mod scheduler;

use panel::Panel;

/// Module start: publish the entry points, refresh immediately, then wire
/// the form once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let panel = panel::install(Panel::new(panel::load_config()));
    if let Some(window) = dom::window() {
        globals::install(&window);
        if let Ok(pathname) = window.location().pathname() {
            panel.return_home_if_rebooting(&pathname);
        }
    }
    panel.refresh_status();

    when_dom_ready(move || {
        panel.sync_all_fields();

        let p = Rc::clone(&panel);
        on_change(&FieldId::ScheduleEnable.dom_id(), move || p.sync_schedule_fields());

        for relay in panel.config().relays() {
            let p = Rc::clone(&panel);
            on_change(&FieldId::Ping(relay).dom_id(), move || p.sync_ping_fields(relay));
        }

        let p = Rc::clone(&panel);
        on_change(&FieldId::UploadInput.dom_id(), move || p.upload_selected());
    });
}

/// Re-read `/api/status` and restyle the relay buttons.
#[wasm_bindgen(js_name = updateStatus)]
pub fn update_status() {
    if let Some(panel) = panel::current() {
        panel.refresh_status();
    }
}

/// Toggle relay `id`, then refresh after the configured delay.
#[wasm_bindgen(js_name = toggleRelay)]
pub fn toggle_relay(id: JsValue) {
    let Some(panel) = panel::current() else {
        return;
    };
    match relay_arg(&id) {
        Ok(relay) => panel.toggle_relay(relay),
        Err(err) => leptos::logging::warn!("toggleRelay: {err}"),
    }
}

#[wasm_bindgen(js_name = clearLog)]
pub fn clear_log() {
    if let Some(panel) = panel::current() {
        panel.clear_log();
    }
}

#[wasm_bindgen(js_name = triggerUpload)]
pub fn trigger_upload() {
    if let Some(panel) = panel::current() {
        panel.trigger_upload();
    }
}

#[wasm_bindgen(js_name = togglePing)]
pub fn toggle_ping(index: JsValue) {
    let Some(panel) = panel::current() else {
        return;
    };
    match relay_arg(&index) {
        Ok(relay) => panel.sync_ping_fields(relay),
        Err(err) => leptos::logging::warn!("togglePing: {err}"),
    }
}

#[wasm_bindgen(js_name = toggleDeepSleep)]
pub fn toggle_deep_sleep() {
    if let Some(panel) = panel::current() {
        panel.sync_schedule_fields();
    }
}

/// Return to `/` after `delay` milliseconds (default from configuration).
#[wasm_bindgen(js_name = setPageTimeout)]
pub fn set_page_timeout(delay: JsValue) {
    if let Some(panel) = panel::current() {
        panel.return_home_after(delay_arg(&delay));
    }
}

/// Relay index passed by an inline handler, as a number or numeric text.
fn relay_arg(value: &JsValue) -> Result<RelayId, ValidationError> {
    let text = match (value.as_f64(), value.as_string()) {
        (Some(index), _) => index.to_string(),
        (None, Some(text)) => text,
        (None, None) => format!("{value:?}"),
    };
    text.parse()
}

/// Delay in milliseconds, clamped to the timer range; `undefined` or a
/// negative value means the default.
fn delay_arg(value: &JsValue) -> Option<Duration> {
    value
        .as_f64()
        .map(|ms| ms.min(f64::from(MAX_TIMER_MS)))
        .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
}

/// Run `f` now if the document has been parsed, else on `DOMContentLoaded`.
fn when_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != DocumentReadyState::Loading {
        f();
        return;
    }
    let callback = Closure::once_into_js(move |_: web_sys::Event| f());
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        leptos::logging::warn!("failed to wait for DOMContentLoaded: {err:?}");
    }
}

/// Attach a `change` listener to element `id`, if present. Listeners live
/// as long as the page.
fn on_change(id: &str, mut handler: impl FnMut() + 'static) {
    let Some(target) = dom::element_by_id::<HtmlElement>(id) else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler());
    if let Err(err) =
        target.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        leptos::logging::warn!("failed to listen on #{id}: {err:?}");
    }
    closure.forget();
}
