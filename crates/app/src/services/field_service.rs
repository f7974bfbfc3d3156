//! Field service — enable settings fields from their controlling checkbox.

use relayboard_domain::form::{FieldId, ping_fields, ping_updates, schedule_fields, schedule_updates};
use relayboard_domain::relay::RelayId;

use crate::ports::FormView;

pub struct FieldService<F> {
    form: F,
}

impl<F: FormView> FieldService<F> {
    pub fn new(form: F) -> Self {
        Self { form }
    }

    /// Enable `ip<i>` and `reset<i>` only while `ping<i>` is checked.
    ///
    /// Does nothing unless all three fields exist. Returns whether the rule
    /// was applied.
    pub fn sync_ping_fields(&self, relay: RelayId) -> bool {
        let Some(enabled) = self.checked_if_complete(&ping_fields(relay)) else {
            return false;
        };
        for update in ping_updates(relay, enabled) {
            self.form.apply_field(&update);
        }
        true
    }

    /// Enable and un-gray the wake/sleep times only while the schedule is on.
    ///
    /// Does nothing unless all three fields exist. Returns whether the rule
    /// was applied.
    pub fn sync_schedule_fields(&self) -> bool {
        let Some(enabled) = self.checked_if_complete(&schedule_fields()) else {
            return false;
        };
        for update in schedule_updates(enabled) {
            self.form.apply_field(&update);
        }
        true
    }

    /// Load-time pass: every relay's ping fields, then the schedule fields.
    ///
    /// Returns how many rules were applied.
    #[tracing::instrument(skip(self, relays))]
    pub fn sync_all(&self, relays: impl IntoIterator<Item = RelayId>) -> usize {
        let mut applied = relays
            .into_iter()
            .filter(|relay| self.sync_ping_fields(*relay))
            .count();
        if self.sync_schedule_fields() {
            applied += 1;
        }
        tracing::debug!(applied, "settings fields synced");
        applied
    }

    /// Checked state of the first field, if every field in the group exists.
    fn checked_if_complete(&self, group: &[FieldId; 3]) -> Option<bool> {
        if !group.iter().all(|field| self.form.has_field(*field)) {
            return None;
        }
        self.form.is_checked(group[0])
    }
}
