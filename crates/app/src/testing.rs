//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::time::Duration;

use relayboard_domain::form::{FieldId, FieldUpdate, MUTED_COLOR, Tint};
use relayboard_domain::relay::RelayId;
use relayboard_domain::status::StatusSnapshot;
use relayboard_domain::view::{ButtonUpdate, MANAGED_CLASSES};

use crate::error::DeviceError;
use crate::ports::{
    DeviceApi, Dialogs, FormView, LocalTask, Navigator, RelayView, Scheduler, UploadControl,
};

pub fn relay(index: usize) -> RelayId {
    RelayId::new(index).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    FetchStatus,
    Toggle(RelayId),
    ClearLog,
}

pub struct FakeDevice {
    pub status: RefCell<Result<StatusSnapshot, DeviceError>>,
    pub toggle_result: RefCell<Result<(), DeviceError>>,
    pub clear_log_result: RefCell<Result<(), DeviceError>>,
    pub calls: RefCell<Vec<DeviceCall>>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self {
            status: RefCell::new(Ok(StatusSnapshot::default())),
            toggle_result: RefCell::new(Ok(())),
            clear_log_result: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeDevice {
    pub fn with_status(snapshot: StatusSnapshot) -> Self {
        let device = Self::default();
        device.set_status(snapshot);
        device
    }

    pub fn set_status(&self, snapshot: StatusSnapshot) {
        *self.status.borrow_mut() = Ok(snapshot);
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &DeviceCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

impl DeviceApi for FakeDevice {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DeviceError>> {
        self.calls.borrow_mut().push(DeviceCall::FetchStatus);
        let result = self.status.borrow().clone();
        async { result }
    }

    fn toggle_relay(&self, relay: RelayId) -> impl Future<Output = Result<(), DeviceError>> {
        self.calls.borrow_mut().push(DeviceCall::Toggle(relay));
        let result = self.toggle_result.borrow().clone();
        async { result }
    }

    fn clear_log(&self) -> impl Future<Output = Result<(), DeviceError>> {
        self.calls.borrow_mut().push(DeviceCall::ClearLog);
        let result = self.clear_log_result.borrow().clone();
        async { result }
    }
}

/// A relay button as the DOM would hold it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeButton {
    pub classes: BTreeSet<String>,
    pub dot_color: Option<String>,
    pub label: String,
}

impl FakeButton {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Default)]
pub struct FakeRelayView {
    pub buttons: RefCell<HashMap<RelayId, FakeButton>>,
}

impl FakeRelayView {
    /// A page with `relay<i>` buttons for each index, labelled `Relay <i>`.
    pub fn with_buttons(indices: &[usize]) -> Self {
        let view = Self::default();
        for &index in indices {
            view.buttons.borrow_mut().insert(
                relay(index),
                FakeButton {
                    label: format!("Relay {index}"),
                    ..FakeButton::default()
                },
            );
        }
        view
    }

    pub fn button(&self, index: usize) -> FakeButton {
        self.buttons.borrow()[&relay(index)].clone()
    }
}

impl RelayView for FakeRelayView {
    fn apply_button(&self, update: &ButtonUpdate) -> bool {
        let mut buttons = self.buttons.borrow_mut();
        let Some(button) = buttons.get_mut(&update.relay) else {
            return false;
        };
        for class in MANAGED_CLASSES {
            button.classes.remove(class);
        }
        button.dot_color = None;
        button
            .classes
            .extend(update.classes().into_iter().map(str::to_string));
        if let Some(label) = &update.label {
            button.label.clone_from(label);
        }
        if let Some(dot) = update.dot {
            button.dot_color = Some(dot.css_value().to_string());
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeField {
    pub checked: bool,
    pub disabled: bool,
    pub color: Option<String>,
}

#[derive(Default)]
pub struct FakeForm {
    pub fields: RefCell<HashMap<FieldId, FakeField>>,
}

impl FakeForm {
    pub fn add(&self, field: FieldId, checked: bool) {
        self.fields.borrow_mut().insert(
            field,
            FakeField {
                checked,
                ..FakeField::default()
            },
        );
    }

    pub fn set_checked(&self, field: FieldId, checked: bool) {
        if let Some(state) = self.fields.borrow_mut().get_mut(&field) {
            state.checked = checked;
        }
    }

    pub fn field(&self, field: FieldId) -> FakeField {
        self.fields.borrow()[&field].clone()
    }
}

impl FormView for FakeForm {
    fn has_field(&self, field: FieldId) -> bool {
        self.fields.borrow().contains_key(&field)
    }

    fn is_checked(&self, field: FieldId) -> Option<bool> {
        self.fields.borrow().get(&field).map(|f| f.checked)
    }

    fn apply_field(&self, update: &FieldUpdate) {
        let mut fields = self.fields.borrow_mut();
        let Some(state) = fields.get_mut(&update.field) else {
            return;
        };
        state.disabled = update.disabled;
        match update.tint {
            Some(Tint::Muted) => state.color = Some(MUTED_COLOR.to_string()),
            Some(Tint::Default) => state.color = None,
            None => {}
        }
    }
}

/// Dialogs, navigation and the upload form in one fake page.
pub struct FakeBrowser {
    pub confirm_answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub reloads: Cell<usize>,
    pub navigations: RefCell<Vec<String>>,
    pub has_upload_form: Cell<bool>,
    pub pickers_opened: Cell<usize>,
    pub selected_files: Cell<usize>,
    pub submits: Cell<usize>,
}

impl Default for FakeBrowser {
    fn default() -> Self {
        Self {
            confirm_answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
            navigations: RefCell::new(Vec::new()),
            has_upload_form: Cell::new(true),
            pickers_opened: Cell::new(0),
            selected_files: Cell::new(0),
            submits: Cell::new(0),
        }
    }
}

impl FakeBrowser {
    pub fn declining() -> Self {
        let browser = Self::default();
        browser.confirm_answer.set(false);
        browser
    }
}

impl Dialogs for FakeBrowser {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

impl Navigator for FakeBrowser {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

impl UploadControl for FakeBrowser {
    fn open_picker(&self) -> bool {
        if !self.has_upload_form.get() {
            return false;
        }
        self.pickers_opened.set(self.pickers_opened.get() + 1);
        true
    }

    fn selected_file_count(&self) -> usize {
        self.selected_files.get()
    }

    fn submit(&self) -> bool {
        if !self.has_upload_form.get() {
            return false;
        }
        self.submits.set(self.submits.get() + 1);
        true
    }
}

/// Records tasks instead of running them; tests drive the clock by hand.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(Option<Duration>, LocalTask)>>,
}

impl ManualScheduler {
    /// Delays of the pending tasks, `None` for immediate ones.
    pub fn pending(&self) -> Vec<Option<Duration>> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every pending task to completion, including tasks they schedule.
    pub async fn run_all(&self) {
        loop {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            if tasks.is_empty() {
                break;
            }
            for (_, task) in tasks {
                task.await;
            }
        }
    }

    /// Run only the tasks due within `elapsed`; later ones stay pending.
    pub async fn advance(&self, elapsed: Duration) {
        let due: Vec<LocalTask> = {
            let mut tasks = self.tasks.borrow_mut();
            let (due, later): (Vec<_>, Vec<_>) = std::mem::take(&mut *tasks)
                .into_iter()
                .partition(|(delay, _)| delay.is_none_or(|d| d <= elapsed));
            *tasks = later;
            due.into_iter().map(|(_, task)| task).collect()
        };
        for task in due {
            task.await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn spawn(&self, task: LocalTask) {
        self.tasks.borrow_mut().push((None, task));
    }

    fn spawn_after(&self, delay: Duration, task: LocalTask) {
        self.tasks.borrow_mut().push((Some(delay), task));
    }
}
