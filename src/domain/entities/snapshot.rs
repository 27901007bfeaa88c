//! Snapshot entity - every device visible at one sampling instant

use super::device::Device;

/// Ordered set of devices from one sample.
///
/// Order follows the host listing and is kept for display. Ids are unique;
/// the first occurrence of an id wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    devices: Vec<Device>,
}

/// Devices split by connectivity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub online: Vec<Device>,
    pub offline: Vec<Device>,
}

impl Snapshot {
    pub fn new(devices: Vec<Device>) -> Self {
        let mut unique: Vec<Device> = Vec::with_capacity(devices.len());
        for device in devices {
            if !unique.iter().any(|d| d.id() == device.id()) {
                unique.push(device);
            }
        }
        Self { devices: unique }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn partition(&self) -> Partition {
        Partition::of(&self.devices)
    }
}

impl From<Vec<Device>> for Snapshot {
    fn from(devices: Vec<Device>) -> Self {
        Self::new(devices)
    }
}

impl Partition {
    /// Split `devices` preserving their relative order.
    /// Anything not online (offline, unauthorized) lands in `offline`.
    pub fn of(devices: &[Device]) -> Self {
        let (online, offline) = devices.iter().cloned().partition(Device::is_online);
        Self { online, offline }
    }

    pub fn has_online(&self) -> bool {
        !self.online.is_empty()
    }
}
