//! Differ Domain Service
//!
//! Classifies what happened between two snapshots.

use crate::domain::entities::{Device, Snapshot};

/// Changes between two snapshots, keyed by device id.
///
/// `added` and `changed` follow the order of the newer snapshot, `removed`
/// follows the older one. Devices equal by value appear nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<Device>,
    pub removed: Vec<Device>,
    pub changed: Vec<Device>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Short human summary, e.g. "+1 ~0 -2"
    pub fn summary(&self) -> String {
        format!(
            "+{} ~{} -{}",
            self.added.len(),
            self.changed.len(),
            self.removed.len()
        )
    }
}

/// Compare `previous` against `current`.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for device in current.devices() {
        match previous.get(device.id()) {
            None => changes.added.push(device.clone()),
            Some(old) if old.differs_from(device) => changes.changed.push(device.clone()),
            Some(_) => {}
        }
    }

    changes.removed = previous
        .devices()
        .iter()
        .filter(|d| !current.contains(d.id()))
        .cloned()
        .collect();

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeviceState::{Offline, Online, Unauthorized};

    fn ids(devices: &[Device]) -> Vec<&str> {
        devices.iter().map(Device::id).collect()
    }

    #[test]
    fn identical_snapshots_produce_no_changes() {
        let s = Snapshot::new(vec![
            Device::new("A", "Pixel", Online),
            Device::new("B", "Galaxy", Offline),
        ]);
        let changes = diff(&s, &s.clone());
        assert!(changes.is_empty());
    }

    #[test]
    fn new_device_is_added() {
        let before = Snapshot::new(vec![Device::new("A", "Pixel", Online)]);
        let after = Snapshot::new(vec![
            Device::new("A", "Pixel", Online),
            Device::new("B", "Galaxy", Online),
        ]);

        let changes = diff(&before, &after);

        assert_eq!(ids(&changes.added), ["B"]);
        assert!(changes.changed.is_empty());
        assert!(changes.removed.is_empty());
    }

    #[test]
    fn going_offline_is_a_change() {
        let before = Snapshot::new(vec![Device::new("A", "Pixel", Online)]);
        let after = Snapshot::new(vec![Device::new("A", "Pixel", Offline)]);

        let changes = diff(&before, &after);

        assert_eq!(ids(&changes.changed), ["A"]);
        assert_eq!(changes.changed[0].state(), Offline);
        assert!(changes.added.is_empty());
    }

    #[test]
    fn model_change_is_a_change() {
        let before = Snapshot::new(vec![Device::new("A", "unknown", Unauthorized)]);
        let after = Snapshot::new(vec![Device::new("A", "Pixel 7", Unauthorized)]);
        assert_eq!(ids(&diff(&before, &after).changed), ["A"]);
    }

    #[test]
    fn vanished_device_is_removed_in_previous_order() {
        let before = Snapshot::new(vec![
            Device::new("C", "Nexus", Online),
            Device::new("A", "Pixel", Online),
            Device::new("B", "Galaxy", Online),
        ]);
        let after = Snapshot::new(vec![Device::new("A", "Pixel", Online)]);

        let changes = diff(&before, &after);

        assert_eq!(ids(&changes.removed), ["C", "B"]);
        assert_eq!(changes.summary(), "+0 ~0 -2");
    }

    #[test]
    fn added_and_changed_follow_current_order() {
        let before = Snapshot::new(vec![
            Device::new("A", "Pixel", Online),
            Device::new("B", "Galaxy", Online),
        ]);
        let after = Snapshot::new(vec![
            Device::new("Z", "New", Online),
            Device::new("B", "Galaxy", Offline),
            Device::new("Y", "Newer", Online),
            Device::new("A", "Pixel", Unauthorized),
        ]);

        let changes = diff(&before, &after);

        assert_eq!(ids(&changes.added), ["Z", "Y"]);
        assert_eq!(ids(&changes.changed), ["B", "A"]);
    }
}
