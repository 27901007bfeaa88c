//! Multiplex Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::application::detector::{DetectorEvent, DeviceDetector, ListenerId};
use crate::domain::entities::Snapshot;
use crate::domain::ports::{CommandRunner, DeviceSource};
use crate::error::{AdbmuxResult, DetectionError};

use super::batch::{BatchReport, BatchRunner};
use super::event::{MultiplexOptions, MuxEvent, RunKind};

/// How often the blocking loop checks the running flag
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Multiplex Use Case
///
/// Entry point for the `adbmux` binary: one run over the current devices,
/// then, in watch mode, one run per detector notification.
pub struct MultiplexUseCase<S, R> {
    detector: DeviceDetector<S>,
    batch: Arc<BatchRunner<R>>,
    options: MultiplexOptions,
}

impl<S, R> MultiplexUseCase<S, R>
where
    S: DeviceSource + 'static,
    R: CommandRunner + 'static,
{
    pub fn new(source: S, runner: R, options: MultiplexOptions) -> Self {
        let batch = BatchRunner::new(runner, &options.command, &options.keyword);
        Self {
            detector: DeviceDetector::new(source, options.interval),
            batch: Arc::new(batch),
            options,
        }
    }

    pub fn detector(&self) -> &DeviceDetector<S> {
        &self.detector
    }

    /// Normalized command sent to devices
    pub fn command(&self) -> &str {
        self.batch.command()
    }

    /// Query the host once and run on every online device.
    ///
    /// Returns the snapshot used so it can seed the watch baseline.
    pub fn run_once(
        &self,
        on_event: &dyn Fn(MuxEvent),
    ) -> Result<(Snapshot, BatchReport), DetectionError> {
        let snapshot = self.detector.get_devices()?;
        let report = self
            .batch
            .run(RunKind::Initial, snapshot.devices(), on_event);
        Ok((snapshot, report))
    }

    /// Subscribe to the detector: re-run on each added/changed batch.
    ///
    /// Execution failures only end their batch. A query failure is reported
    /// and, with `stop_on_error`, disarms the watch.
    pub fn attach<F>(&self, on_event: Arc<F>) -> ListenerId
    where
        F: Fn(MuxEvent) + Send + Sync + 'static,
    {
        let batch = Arc::clone(&self.batch);
        let handle = self.detector.handle();
        let stop_on_error = self.options.stop_on_error;

        self.detector.subscribe(move |event| match event {
            DetectorEvent::DevicesAdded(devices) => {
                batch.run(RunKind::Added, devices, &*on_event);
            }
            DetectorEvent::DevicesChanged(devices) => {
                batch.run(RunKind::Changed, devices, &*on_event);
            }
            DetectorEvent::Error(error) => {
                on_event(MuxEvent::DetectionFailed {
                    error: error.clone(),
                    stopping: stop_on_error,
                });
                if stop_on_error {
                    handle.unwatch();
                }
            }
        })
    }

    /// Run once, then (in watch mode) block until `running` is cleared or
    /// the watch stops itself.
    ///
    /// Only a failure of the initial device query is returned as an error.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> AdbmuxResult<BatchReport>
    where
        F: Fn(MuxEvent) + Send + Sync + 'static,
    {
        let on_event = Arc::new(on_event);
        let (snapshot, report) = self.run_once(&*on_event)?;

        if !self.options.watch {
            return Ok(report);
        }

        self.attach(Arc::clone(&on_event));
        on_event(MuxEvent::WatchStarted {
            interval: self.detector.interval(),
        });
        self.detector.watch_from(snapshot)?;

        while running.load(Ordering::SeqCst) && self.detector.is_watching() {
            thread::sleep(SHUTDOWN_POLL);
        }

        info!("stopping watch");
        self.detector.unwatch();
        on_event(MuxEvent::Shutdown);
        Ok(report)
    }
}
