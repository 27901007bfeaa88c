//! Domain Entities
//!
//! - `Device` - One attached device at one sampling instant
//! - `Snapshot` - Every device visible at one sampling instant

mod device;
mod snapshot;

pub use device::{Device, DeviceState};
pub use snapshot::{Partition, Snapshot};
