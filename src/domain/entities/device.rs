//! Device entity - one attached device as seen by the host
//!
//! Devices are created fresh on every sample and never mutated. A device
//! whose state changed between two samples is a new record with the same id.

use std::fmt;

use crate::domain::ports::CommandRunner;
use crate::error::ExecutionError;

/// Connectivity state reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    Online,
    Offline,
    Unauthorized,
}

impl DeviceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Online => "online",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device attached to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: String,
    model: String,
    state: DeviceState,
}

impl Device {
    pub fn new(id: impl Into<String>, model: impl Into<String>, state: DeviceState) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            state,
        }
    }

    /// Stable identifier assigned by the host (the adb serial)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn is_online(&self) -> bool {
        self.state == DeviceState::Online
    }

    /// Same id, but the observable state or model differs
    pub fn differs_from(&self, other: &Device) -> bool {
        self.id == other.id && (self.state != other.state || self.model != other.model)
    }

    /// `"<id> (<model>)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.id, self.model)
    }

    /// `"<id> (<model>) - <state>"`
    pub fn status_string(&self) -> String {
        format!("{} - {}", self.label(), self.state)
    }

    /// Run `command` on this device through `runner`.
    ///
    /// Blocks until the backend returns. The command is forwarded as-is;
    /// callers normalize it first.
    pub fn execute_command<R>(&self, runner: &R, command: &str) -> Result<String, ExecutionError>
    where
        R: CommandRunner + ?Sized,
    {
        runner.run(&self.id, command)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.id, self.model, self.state)
    }
}
