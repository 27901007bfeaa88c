//! Error types for adbmux
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for adbmux operations
pub type AdbmuxResult<T> = Result<T, AdbmuxError>;

/// The host device-listing subsystem could not produce a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// The listing tool could not be started
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// The listing tool exited unsuccessfully
    #[error("device listing failed (exit code {code:?}): {output}")]
    Failed { code: Option<i32>, output: String },

    /// The listing output could not be parsed
    #[error("malformed device listing at line {line}: '{content}'")]
    Malformed { line: usize, content: String },
}

/// A command could not be executed on one specific device.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Device id is empty or would not survive shell quoting
    #[error("invalid device id '{id}'")]
    InvalidDeviceId { id: String },

    /// The execution backend could not be started
    #[error("failed to run command on {device}: {message}")]
    Spawn { device: String, message: String },

    /// Command exited unsuccessfully
    #[error("command failed on {device} (exit code {code:?}): {output}")]
    Failed {
        device: String,
        code: Option<i32>,
        output: String,
    },

    /// Command did not finish in time
    #[error("command timed out on {device} after {secs}s: {output}")]
    TimedOut {
        device: String,
        secs: u64,
        output: String,
    },

    /// Command was killed because the run is shutting down
    #[error("command interrupted on {device}: {output}")]
    Interrupted { device: String, output: String },
}

impl ExecutionError {
    /// Output captured before the failure, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Failed { output, .. }
            | Self::TimedOut { output, .. }
            | Self::Interrupted { output, .. } => Some(output),
            Self::InvalidDeviceId { .. } | Self::Spawn { .. } => None,
        }
    }
}

/// Main error type for adbmux operations
#[derive(Error, Debug)]
pub enum AdbmuxError {
    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Config file exists but is not valid TOML for our schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Background watch thread could not be started
    #[error("failed to start watch thread: {0}")]
    WatchThread(String),
}
