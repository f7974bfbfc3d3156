//! Settings form fields and their enablement policy.

use std::fmt;

use crate::relay::RelayId;

/// Text color applied to disabled schedule fields.
pub const MUTED_COLOR: &str = "gray";

/// A form control the panel reads or drives, by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// `ping<i>`: enables pinging for a relay.
    Ping(RelayId),
    /// `ip<i>`: ping target address.
    Ip(RelayId),
    /// `reset<i>`: reset-on-failure checkbox.
    Reset(RelayId),
    /// `globalSchedEnable`
    ScheduleEnable,
    /// `globalOnTime`
    WakeTime,
    /// `globalOffTime`
    SleepTime,
    /// `uploadInput`
    UploadInput,
    /// `uploadForm`
    UploadForm,
}

impl FieldId {
    /// Element id in the device-rendered page.
    #[must_use]
    pub fn dom_id(self) -> String {
        match self {
            Self::Ping(relay) => format!("ping{relay}"),
            Self::Ip(relay) => format!("ip{relay}"),
            Self::Reset(relay) => format!("reset{relay}"),
            Self::ScheduleEnable => "globalSchedEnable".to_string(),
            Self::WakeTime => "globalOnTime".to_string(),
            Self::SleepTime => "globalOffTime".to_string(),
            Self::UploadInput => "uploadInput".to_string(),
            Self::UploadForm => "uploadForm".to_string(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dom_id())
    }
}

/// Text color override for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Gray text, see [`MUTED_COLOR`].
    Muted,
    /// Clear any inline color.
    Default,
}

/// Enablement (and optional tint) to write to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FieldId,
    pub disabled: bool,
    /// `None` leaves the field's color untouched.
    pub tint: Option<Tint>,
}

/// Fields that must all exist for the ping rule of `relay` to apply.
#[must_use]
pub fn ping_fields(relay: RelayId) -> [FieldId; 3] {
    [FieldId::Ping(relay), FieldId::Ip(relay), FieldId::Reset(relay)]
}

/// Fields that must all exist for the schedule rule to apply.
#[must_use]
pub fn schedule_fields() -> [FieldId; 3] {
    [FieldId::ScheduleEnable, FieldId::WakeTime, FieldId::SleepTime]
}

/// The address and reset controls follow the relay's ping checkbox.
#[must_use]
pub fn ping_updates(relay: RelayId, ping_enabled: bool) -> [FieldUpdate; 2] {
    let disabled = !ping_enabled;
    [
        FieldUpdate {
            field: FieldId::Ip(relay),
            disabled,
            tint: None,
        },
        FieldUpdate {
            field: FieldId::Reset(relay),
            disabled,
            tint: None,
        },
    ]
}

/// The wake/sleep times follow the schedule checkbox and gray out when off.
#[must_use]
pub fn schedule_updates(schedule_enabled: bool) -> [FieldUpdate; 2] {
    let disabled = !schedule_enabled;
    let tint = Some(if disabled { Tint::Muted } else { Tint::Default });
    [
        FieldUpdate {
            field: FieldId::WakeTime,
            disabled,
            tint,
        },
        FieldUpdate {
            field: FieldId::SleepTime,
            disabled,
            tint,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay(index: usize) -> RelayId {
        RelayId::new(index).unwrap()
    }

    #[test]
    fn should_format_per_relay_dom_ids() {
        assert_eq!(FieldId::Ping(relay(0)).dom_id(), "ping0");
        assert_eq!(FieldId::Ip(relay(4)).dom_id(), "ip4");
        assert_eq!(FieldId::Reset(relay(5)).to_string(), "reset5");
    }

    #[test]
    fn should_name_global_fields() {
        assert_eq!(FieldId::ScheduleEnable.dom_id(), "globalSchedEnable");
        assert_eq!(FieldId::WakeTime.dom_id(), "globalOnTime");
        assert_eq!(FieldId::SleepTime.dom_id(), "globalOffTime");
        assert_eq!(FieldId::UploadInput.dom_id(), "uploadInput");
        assert_eq!(FieldId::UploadForm.dom_id(), "uploadForm");
    }

    #[test]
    fn should_disable_ip_and_reset_when_ping_unchecked() {
        let updates = ping_updates(relay(1), false);
        assert_eq!(updates[0].field, FieldId::Ip(relay(1)));
        assert_eq!(updates[1].field, FieldId::Reset(relay(1)));
        assert!(updates.iter().all(|u| u.disabled && u.tint.is_none()));
    }

    #[test]
    fn should_enable_ip_and_reset_when_ping_checked() {
        assert!(ping_updates(relay(1), true).iter().all(|u| !u.disabled));
    }

    #[test]
    fn should_disable_and_mute_times_when_schedule_unchecked() {
        let updates = schedule_updates(false);
        assert_eq!(updates[0].field, FieldId::WakeTime);
        assert_eq!(updates[1].field, FieldId::SleepTime);
        assert!(
            updates
                .iter()
                .all(|u| u.disabled && u.tint == Some(Tint::Muted))
        );
    }

    #[test]
    fn should_enable_times_with_default_color_when_schedule_checked() {
        assert!(
            schedule_updates(true)
                .iter()
                .all(|u| !u.disabled && u.tint == Some(Tint::Default))
        );
    }
}
