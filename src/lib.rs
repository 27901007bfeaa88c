//! adbmux - run one adb command on every attached Android device
//!
//! adbmux lists the devices attached to the host, runs a command on each
//! one that is online, and can keep watching the host so the command also
//! runs on devices that connect (or change state) later.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    DetectorEvent, DetectorState, DeviceDetector, MultiplexOptions, MultiplexUseCase, MuxEvent,
    RunKind, TickOutcome, WatchHandle,
};
pub use config::Config;
pub use domain::entities::{Device, DeviceState, Snapshot};
pub use domain::policies::normalize_command;
pub use domain::ports::{CommandRunner, DeviceSource};
pub use domain::services::{diff, ChangeSet};
pub use error::{AdbmuxError, AdbmuxResult, DetectionError, ExecutionError};
pub use infrastructure::AdbClient;
