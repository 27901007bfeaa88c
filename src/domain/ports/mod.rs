//! Domain Ports (Interfaces)
//!
//! Boundaries to the host device subsystem. The infrastructure layer
//! provides the adb-backed implementations.

pub mod command_runner;
pub mod device_source;

pub use command_runner::CommandRunner;
pub use device_source::DeviceSource;
