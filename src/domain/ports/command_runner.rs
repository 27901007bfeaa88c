//! Command Runner Port
//!
//! Executes an opaque command string against one device.

use crate::error::ExecutionError;

/// External command execution backend
pub trait CommandRunner: Send + Sync {
    /// Run `command` scoped to `device_id` and return its combined output.
    ///
    /// Blocks until the command exits or the backend gives up. No retry.
    fn run(&self, device_id: &str, command: &str) -> Result<String, ExecutionError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    fn run(&self, device_id: &str, command: &str) -> Result<String, ExecutionError> {
        (**self).run(device_id, command)
    }
}
