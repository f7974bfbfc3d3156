//! Browser ports — dialogs, navigation and the config upload form.

use std::rc::Rc;

/// Blocking user dialogs.
pub trait Dialogs {
    /// Ask the user; `true` means they accepted.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Page navigation.
pub trait Navigator {
    fn reload(&self);

    fn navigate(&self, url: &str);
}

/// The hidden `#uploadInput` file picker and its `#uploadForm`.
pub trait UploadControl {
    /// Open the file picker. Returns `false` if the input is missing.
    fn open_picker(&self) -> bool;

    /// Number of files currently selected in the picker.
    fn selected_file_count(&self) -> usize;

    /// Submit the upload form. Returns `false` if the form is missing.
    fn submit(&self) -> bool;
}

impl<T: Dialogs> Dialogs for Rc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

impl<T: Navigator> Navigator for Rc<T> {
    fn reload(&self) {
        (**self).reload();
    }

    fn navigate(&self, url: &str) {
        (**self).navigate(url);
    }
}

impl<T: UploadControl> UploadControl for Rc<T> {
    fn open_picker(&self) -> bool {
        (**self).open_picker()
    }

    fn selected_file_count(&self) -> usize {
        (**self).selected_file_count()
    }

    fn submit(&self) -> bool {
        (**self).submit()
    }
}
