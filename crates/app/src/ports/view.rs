//! View ports — where binding decisions are written.

use std::rc::Rc;

use relayboard_domain::form::{FieldId, FieldUpdate};
use relayboard_domain::view::ButtonUpdate;

/// The grid of relay buttons.
pub trait RelayView {
    /// Restyle the relay's button.
    ///
    /// Returns `false` when the page has no button for that relay; the
    /// update is then dropped.
    fn apply_button(&self, update: &ButtonUpdate) -> bool;
}

/// The settings form.
pub trait FormView {
    /// Whether the page contains the field.
    fn has_field(&self, field: FieldId) -> bool;

    /// Checked state of a checkbox, `None` if it is missing.
    fn is_checked(&self, field: FieldId) -> Option<bool>;

    /// Write enablement and tint; missing fields are ignored.
    fn apply_field(&self, update: &FieldUpdate);
}

impl<T: RelayView> RelayView for Rc<T> {
    fn apply_button(&self, update: &ButtonUpdate) -> bool {
        (**self).apply_button(update)
    }
}

impl<T: FormView> FormView for Rc<T> {
    fn has_field(&self, field: FieldId) -> bool {
        (**self).has_field(field)
    }

    fn is_checked(&self, field: FieldId) -> Option<bool> {
        (**self).is_checked(field)
    }

    fn apply_field(&self, update: &FieldUpdate) {
        (**self).apply_field(update);
    }
}
