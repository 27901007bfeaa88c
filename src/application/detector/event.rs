//! Detector notifications

use crate::domain::entities::Device;
use crate::error::DetectionError;

/// Raised by a tick. At most one of each kind per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectorEvent {
    /// Ids that were not in the previous snapshot
    DevicesAdded(Vec<Device>),
    /// Ids present before whose state or model changed
    DevicesChanged(Vec<Device>),
    /// The host could not be queried; the stored snapshot is unchanged
    Error(DetectionError),
}

impl DetectorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DetectorEvent::DevicesAdded(_) => "devices_added",
            DetectorEvent::DevicesChanged(_) => "devices_changed",
            DetectorEvent::Error(_) => "error",
        }
    }

    pub fn devices(&self) -> &[Device] {
        match self {
            DetectorEvent::DevicesAdded(devices) | DetectorEvent::DevicesChanged(devices) => {
                devices
            }
            DetectorEvent::Error(_) => &[],
        }
    }
}
