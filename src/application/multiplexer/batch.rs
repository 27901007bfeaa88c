//! One batch: partition, then run on each online device in order

use tracing::{debug, warn};

use crate::domain::entities::{Device, Partition};
use crate::domain::policies::normalize_command;
use crate::domain::ports::CommandRunner;
use crate::error::ExecutionError;

use super::event::{MuxEvent, RunKind};

/// Outcome of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Devices the command completed on, with their output
    pub succeeded: Vec<(Device, String)>,
    /// The device that stopped the batch
    pub failed: Option<(Device, ExecutionError)>,
    /// Devices that were not online and got no command
    pub offline: Vec<Device>,
    /// Online devices never reached because of `failed`
    pub skipped: Vec<Device>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }

    /// Number of devices the command was attempted on
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + usize::from(self.failed.is_some())
    }
}

/// Runs the normalized command over batches of devices
#[derive(Debug)]
pub struct BatchRunner<R> {
    runner: R,
    command: String,
}

impl<R: CommandRunner> BatchRunner<R> {
    pub fn new(runner: R, command: &str, keyword: &str) -> Self {
        Self {
            runner,
            command: normalize_command(command, keyword),
        }
    }

    /// Command forwarded to every device
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run on every online device in `devices`, sequentially and in order.
    ///
    /// The first execution failure ends the batch; remaining devices are
    /// reported as skipped.
    pub fn run(&self, kind: RunKind, devices: &[Device], on_event: &dyn Fn(MuxEvent)) -> BatchReport {
        let Partition { online, offline } = Partition::of(devices);
        debug!(
            kind = kind.as_str(),
            online = online.len(),
            offline = offline.len(),
            "batch started"
        );

        on_event(MuxEvent::BatchStarted {
            kind,
            online: online.clone(),
            offline: offline.clone(),
        });

        let mut report = BatchReport {
            offline,
            ..BatchReport::default()
        };

        if online.is_empty() {
            on_event(MuxEvent::NoDevices { kind });
            return report;
        }

        for (idx, device) in online.iter().enumerate() {
            match device.execute_command(&self.runner, &self.command) {
                Ok(output) => {
                    on_event(MuxEvent::CommandSucceeded {
                        device: device.clone(),
                        output: output.clone(),
                    });
                    report.succeeded.push((device.clone(), output));
                }
                Err(error) => {
                    warn!(device = device.id(), error = %error, "command failed, aborting batch");
                    on_event(MuxEvent::CommandFailed {
                        device: device.clone(),
                        error: error.clone(),
                    });
                    report.failed = Some((device.clone(), error));
                    report.skipped = online[idx + 1..].to_vec();
                    if !report.skipped.is_empty() {
                        on_event(MuxEvent::BatchAborted {
                            kind,
                            skipped: report.skipped.clone(),
                        });
                    }
                    break;
                }
            }
        }

        report
    }
}
