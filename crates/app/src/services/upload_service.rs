//! Upload service — warn before replacing the device configuration.

use crate::ports::{Dialogs, UploadControl};

/// Warning shown before the file picker opens.
pub const UPLOAD_WARNING: &str = "If you upload a config.json that is not formatted correctly, \
the ESP32 will probably not work properly or connect to the wifi and you will have to reflash it. \
Want to continue?";

/// What an upload step ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The user dismissed the warning.
    Declined,
    /// The file picker is open.
    PickerOpened,
    /// The change fired with an empty selection.
    NothingSelected,
    /// The upload form was posted.
    Submitted,
    /// The page lacks the upload input or form.
    Unavailable,
}

pub struct UploadService<D, U> {
    dialogs: D,
    upload: U,
}

impl<D: Dialogs, U: UploadControl> UploadService<D, U> {
    pub fn new(dialogs: D, upload: U) -> Self {
        Self { dialogs, upload }
    }

    /// Warn, then open the file picker if the user accepts.
    #[tracing::instrument(skip(self))]
    pub fn trigger_upload(&self) -> UploadOutcome {
        if !self.dialogs.confirm(UPLOAD_WARNING) {
            tracing::debug!("config upload aborted");
            return UploadOutcome::Declined;
        }
        if !self.upload.open_picker() {
            tracing::warn!("page has no upload input");
            return UploadOutcome::Unavailable;
        }
        UploadOutcome::PickerOpened
    }

    /// Submit the upload form as soon as a file has been picked.
    #[tracing::instrument(skip(self))]
    pub fn on_file_selected(&self) -> UploadOutcome {
        if self.upload.selected_file_count() == 0 {
            return UploadOutcome::NothingSelected;
        }
        if !self.upload.submit() {
            tracing::warn!("page has no upload form");
            return UploadOutcome::Unavailable;
        }
        UploadOutcome::Submitted
    }
}
