//! DOM adapters for the device-rendered page.
//!
//! Every lookup goes through `document.getElementById`; a missing element is
//! never an error. Exceptions thrown by DOM calls are logged to the console
//! and otherwise ignored.

use relayboard_app::ports::{Dialogs, FormView, Navigator, RelayView, UploadControl};
use relayboard_domain::form::{FieldId, FieldUpdate, MUTED_COLOR, Tint};
use relayboard_domain::view::{ButtonUpdate, DOT_COLOR_PROPERTY, MANAGED_CLASSES};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up an element by id and cast it, `None` if absent or of another type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Log a DOM call that threw.
fn warn_on_err<T>(call: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        leptos::logging::warn!("{call} failed: {err:?}");
    }
}

/// Writes [`ButtonUpdate`]s onto the `relay<i>` buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomRelayView;

impl RelayView for DomRelayView {
    fn apply_button(&self, update: &ButtonUpdate) -> bool {
        let Some(button) = element_by_id::<HtmlElement>(&update.relay.button_dom_id()) else {
            return false;
        };

        let classes = button.class_list();
        let style = button.style();
        for class in MANAGED_CLASSES {
            warn_on_err("classList.remove", classes.remove_1(class));
        }
        warn_on_err("style.removeProperty", style.remove_property(DOT_COLOR_PROPERTY));

        for class in update.classes() {
            warn_on_err("classList.add", classes.add_1(class));
        }
        if let Some(label) = &update.label {
            button.set_inner_text(label);
        }
        if let Some(dot) = update.dot {
            warn_on_err(
                "style.setProperty",
                style.set_property(DOT_COLOR_PROPERTY, dot.css_value()),
            );
        }
        true
    }
}

/// The settings form fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomForm;

impl FormView for DomForm {
    fn has_field(&self, field: FieldId) -> bool {
        element_by_id::<HtmlElement>(&field.dom_id()).is_some()
    }

    fn is_checked(&self, field: FieldId) -> Option<bool> {
        element_by_id::<HtmlInputElement>(&field.dom_id()).map(|input| input.checked())
    }

    fn apply_field(&self, update: &FieldUpdate) {
        let Some(element) = element_by_id::<HtmlElement>(&update.field.dom_id()) else {
            return;
        };

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(update.disabled);
        } else if update.disabled {
            warn_on_err("setAttribute", element.set_attribute("disabled", ""));
        } else {
            warn_on_err("removeAttribute", element.remove_attribute("disabled"));
        }

        let style = element.style();
        match update.tint {
            Some(Tint::Muted) => {
                warn_on_err("style.setProperty", style.set_property("color", MUTED_COLOR));
            }
            Some(Tint::Default) => {
                warn_on_err("style.removeProperty", style.remove_property("color"));
            }
            None => {}
        }
    }
}

/// `#uploadInput` and `#uploadForm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomUpload;

impl UploadControl for DomUpload {
    fn open_picker(&self) -> bool {
        let Some(input) = element_by_id::<HtmlInputElement>(&FieldId::UploadInput.dom_id()) else {
            return false;
        };
        input.click();
        true
    }

    fn selected_file_count(&self) -> usize {
        element_by_id::<HtmlInputElement>(&FieldId::UploadInput.dom_id())
            .and_then(|input| input.files())
            .map_or(0, |files| files.length() as usize)
    }

    fn submit(&self) -> bool {
        let Some(form) = element_by_id::<HtmlFormElement>(&FieldId::UploadForm.dom_id()) else {
            return false;
        };
        match form.submit() {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("form.submit failed: {err:?}");
                false
            }
        }
    }
}

/// `window.confirm`, `window.alert` and `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

impl Dialogs for BrowserWindow {
    fn confirm(&self, message: &str) -> bool {
        let Some(w) = window() else {
            return false;
        };
        w.confirm_with_message(message).unwrap_or_else(|err| {
            leptos::logging::warn!("confirm failed: {err:?}");
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            warn_on_err("alert", w.alert_with_message(message));
        }
    }
}

impl Navigator for BrowserWindow {
    fn reload(&self) {
        if let Some(w) = window() {
            warn_on_err("location.reload", w.location().reload());
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(w) = window() {
            warn_on_err("location.href", w.location().set_href(url));
        }
    }
}
