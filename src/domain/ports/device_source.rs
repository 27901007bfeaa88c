//! Device Source Port
//!
//! Lists every device the host can see.

use crate::domain::entities::Snapshot;
use crate::error::DetectionError;

/// Host device-listing subsystem
pub trait DeviceSource: Send + Sync {
    /// Query the host right now.
    ///
    /// Fails when the host is unreachable or returns data that cannot be
    /// parsed.
    fn list_devices(&self) -> Result<Snapshot, DetectionError>;
}

impl<T: DeviceSource + ?Sized> DeviceSource for std::sync::Arc<T> {
    fn list_devices(&self) -> Result<Snapshot, DetectionError> {
        (**self).list_devices()
    }
}
