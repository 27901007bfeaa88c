//! Multiplexer events and options

use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::Device;
use crate::domain::policies::DEFAULT_KEYWORD;
use crate::error::{DetectionError, ExecutionError};

/// Why a batch is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// The one-shot run over the full snapshot
    Initial,
    /// Devices the detector saw for the first time
    Added,
    /// Devices whose state or model changed
    Changed,
}

impl RunKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::Initial => "initial",
            RunKind::Added => "added",
            RunKind::Changed => "changed",
        }
    }
}

/// Options for a multiplexed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplexOptions {
    /// Command as the user typed it (keyword not yet stripped)
    pub command: String,
    /// Optional leading word to strip
    pub keyword: String,
    /// Keep running and re-run on device changes
    pub watch: bool,
    /// Detector sampling period
    pub interval: Duration,
    /// Disarm the watch after a failed device query
    pub stop_on_error: bool,
}

impl MultiplexOptions {
    /// Create options with defaults for everything but the command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            keyword: DEFAULT_KEYWORD.to_string(),
            watch: false,
            interval: Duration::from_millis(1000),
            stop_on_error: true,
        }
    }

    /// Take keyword, interval and error policy from config
    pub fn with_config(mut self, config: &Config) -> Self {
        self.keyword = config.adb.keyword.clone();
        self.interval = config.watch.interval();
        self.stop_on_error = config.watch.stop_on_error;
        self
    }

    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }
}

/// Progress of a multiplexed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxEvent {
    /// A batch is starting; devices are split by connectivity
    BatchStarted {
        kind: RunKind,
        online: Vec<Device>,
        offline: Vec<Device>,
    },
    /// Nothing online to run on. Informational, not a failure.
    NoDevices { kind: RunKind },
    /// Command finished on one device
    CommandSucceeded { device: Device, output: String },
    /// Command failed on one device; the rest of the batch is dropped
    CommandFailed {
        device: Device,
        error: ExecutionError,
    },
    /// Devices left unprocessed after a failure
    BatchAborted { kind: RunKind, skipped: Vec<Device> },
    /// Watch armed
    WatchStarted { interval: Duration },
    /// A watch tick could not list devices
    DetectionFailed {
        error: DetectionError,
        stopping: bool,
    },
    /// Watch disarmed (Ctrl+C or stopped after an error)
    Shutdown,
}

impl MuxEvent {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            MuxEvent::CommandFailed { .. }
                | MuxEvent::BatchAborted { .. }
                | MuxEvent::DetectionFailed { .. }
        )
    }
}
