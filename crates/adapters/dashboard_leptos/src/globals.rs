//! Entry points published on `window`.
//!
//! The device renders classic inline handlers (`onclick='toggleRelay(2)'`),
//! which resolve names against the global object rather than the ES module
//! `wasm-bindgen` generates. Each entry point is therefore also set on
//! `window` once the module starts.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A function the device page calls by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Global {
    UpdateStatus,
    ToggleRelay,
    ClearLog,
    TriggerUpload,
    TogglePing,
    ToggleDeepSleep,
    SetPageTimeout,
}

impl Global {
    pub const ALL: [Self; 7] = [
        Self::UpdateStatus,
        Self::ToggleRelay,
        Self::ClearLog,
        Self::TriggerUpload,
        Self::TogglePing,
        Self::ToggleDeepSleep,
        Self::SetPageTimeout,
    ];

    /// Property name on `window`.
    pub fn name(self) -> &'static str {
        match self {
            Self::UpdateStatus => "updateStatus",
            Self::ToggleRelay => "toggleRelay",
            Self::ClearLog => "clearLog",
            Self::TriggerUpload => "triggerUpload",
            Self::TogglePing => "togglePing",
            Self::ToggleDeepSleep => "toggleDeepSleep",
            Self::SetPageTimeout => "setPageTimeout",
        }
    }

    /// A JS function forwarding to the matching export. It lives as long as
    /// the page.
    fn handler(self) -> JsValue {
        match self {
            Self::UpdateStatus => Closure::<dyn Fn()>::new(crate::update_status).into_js_value(),
            Self::ToggleRelay => {
                Closure::<dyn Fn(JsValue)>::new(crate::toggle_relay).into_js_value()
            }
            Self::ClearLog => Closure::<dyn Fn()>::new(crate::clear_log).into_js_value(),
            Self::TriggerUpload => Closure::<dyn Fn()>::new(crate::trigger_upload).into_js_value(),
            Self::TogglePing => Closure::<dyn Fn(JsValue)>::new(crate::toggle_ping).into_js_value(),
            Self::ToggleDeepSleep => {
                Closure::<dyn Fn()>::new(crate::toggle_deep_sleep).into_js_value()
            }
            Self::SetPageTimeout => {
                Closure::<dyn Fn(JsValue)>::new(crate::set_page_timeout).into_js_value()
            }
        }
    }
}

/// Set every [`Global`] on `window`, returning how many were installed.
pub fn install(window: &Window) -> usize {
    let mut installed = 0;
    for global in Global::ALL {
        match Reflect::set(window, &JsValue::from_str(global.name()), &global.handler()) {
            Ok(true) => installed += 1,
            Ok(false) => leptos::logging::warn!("window.{} is read-only", global.name()),
            Err(err) => leptos::logging::warn!("failed to set window.{}: {err:?}", global.name()),
        }
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_publish_every_name_the_device_page_calls() {
        let names: Vec<_> = Global::ALL.iter().map(|g| g.name()).collect();
        for called in [
            "toggleRelay",
            "togglePing",
            "triggerUpload",
            "clearLog",
            "setPageTimeout",
            "toggleDeepSleep",
            "updateStatus",
        ] {
            assert!(names.contains(&called), "{called} is not published");
        }
    }

    #[test]
    fn should_use_distinct_names() {
        let mut names: Vec<_> = Global::ALL.iter().map(|g| g.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Global::ALL.len());
    }
}
