//! Device detector implementation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::domain::entities::Snapshot;
use crate::domain::ports::DeviceSource;
use crate::domain::services::{diff, ChangeSet};
use crate::error::{AdbmuxError, AdbmuxResult, DetectionError};

use super::event::DetectorEvent;

type Listener = Arc<dyn Fn(&DetectorEvent) + Send + Sync>;

/// Whether a timer is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    Idle,
    Watching,
}

/// Identifies a subscription for `unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another tick held the single-flight guard
    Skipped,
    /// The device query failed and listeners got `DetectorEvent::Error`
    Failed,
    /// The sample was diffed and stored
    Completed(ChangeSet),
}

/// Samples the host and notifies listeners about added/changed devices.
pub struct DeviceDetector<S> {
    shared: Arc<Shared<S>>,
    control: WatchHandle,
    interval: Duration,
}

struct Shared<S> {
    source: S,
    last: Mutex<Snapshot>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
    tick_guard: Mutex<()>,
}

/// Cloneable control over a detector's watch timer.
///
/// Listeners keep one of these to stop watching from inside a callback.
#[derive(Clone, Default)]
pub struct WatchHandle {
    inner: Arc<WatchControl>,
}

#[derive(Default)]
struct WatchControl {
    stop: Mutex<Option<Sender<()>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<S> DeviceDetector<S>
where
    S: DeviceSource + 'static,
{
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                last: Mutex::new(Snapshot::empty()),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                tick_guard: Mutex::new(()),
            }),
            control: WatchHandle::default(),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Query the host now. Never touches the stored snapshot or the timer.
    pub fn get_devices(&self) -> Result<Snapshot, DetectionError> {
        self.shared.source.list_devices()
    }

    /// Snapshot the next tick will diff against
    pub fn last_snapshot(&self) -> Snapshot {
        lock(&self.shared.last).clone()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&DetectorEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.shared.next_listener.fetch_add(1, Ordering::Relaxed));
        lock(&self.shared.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = lock(&self.shared.listeners);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn state(&self) -> DetectorState {
        if self.control.is_watching() {
            DetectorState::Watching
        } else {
            DetectorState::Idle
        }
    }

    pub fn is_watching(&self) -> bool {
        self.control.is_watching()
    }

    pub fn handle(&self) -> WatchHandle {
        self.control.clone()
    }

    /// Idle -> Watching, diffing the first tick against the stored snapshot.
    ///
    /// A fresh detector stores an empty snapshot, so its first tick reports
    /// every device as added. No-op when already watching.
    pub fn watch(&self) -> AdbmuxResult<()> {
        self.arm(None)
    }

    /// Like `watch`, but `baseline` replaces the stored snapshot first.
    ///
    /// Ignored (baseline included) when already watching.
    pub fn watch_from(&self, baseline: Snapshot) -> AdbmuxResult<()> {
        self.arm(Some(baseline))
    }

    /// Watching -> Idle. Returns false if already idle.
    ///
    /// An in-flight tick is never interrupted; when called from another
    /// thread this waits for it to finish.
    pub fn unwatch(&self) -> bool {
        self.control.unwatch()
    }

    /// Run one sample/diff/notify cycle on the calling thread.
    pub fn tick(&self) -> TickOutcome {
        self.shared.tick()
    }

    fn arm(&self, baseline: Option<Snapshot>) -> AdbmuxResult<()> {
        let mut stop = lock(&self.control.inner.stop);
        if stop.is_some() {
            debug!("watch already armed");
            return Ok(());
        }

        if let Some(baseline) = baseline {
            *lock(&self.shared.last) = baseline;
        }

        let (tx, rx) = channel();
        let shared = Arc::clone(&self.shared);
        let interval = self.interval;
        let worker = thread::Builder::new()
            .name("adbmux-watch".to_string())
            .spawn(move || run_worker(shared, rx, interval))
            .map_err(|e| AdbmuxError::WatchThread(e.to_string()))?;

        *stop = Some(tx);
        *lock(&self.control.inner.worker) = Some(worker);
        info!(interval_ms = interval.as_millis() as u64, "watch armed");
        Ok(())
    }
}

impl<S> Drop for DeviceDetector<S> {
    fn drop(&mut self) {
        self.control.unwatch();
    }
}

impl WatchHandle {
    pub fn is_watching(&self) -> bool {
        lock(&self.inner.stop).is_some()
    }

    /// Disarm the timer. Returns false if it was not armed.
    ///
    /// Joins the worker unless called from the worker itself (i.e. from a
    /// listener), in which case the worker exits after the current tick.
    pub fn unwatch(&self) -> bool {
        // dropping the sender wakes the worker with Disconnected
        let Some(stop) = lock(&self.inner.stop).take() else {
            return false;
        };
        drop(stop);
        info!("watch disarmed");

        let worker = lock(&self.inner.worker)
            .take()
            .filter(|w| w.thread().id() != thread::current().id());
        if let Some(worker) = worker {
            if worker.join().is_err() {
                warn!("watch worker panicked");
            }
        }
        true
    }
}

impl<S: DeviceSource> Shared<S> {
    fn tick(&self) -> TickOutcome {
        let _guard = match self.tick_guard.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                debug!("tick already in progress, skipping");
                return TickOutcome::Skipped;
            }
        };

        let current = match self.source.list_devices() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "device query failed");
                self.notify(&DetectorEvent::Error(err));
                return TickOutcome::Failed;
            }
        };

        let changes = {
            let mut last = lock(&self.last);
            let changes = diff(&last, &current);
            *last = current;
            changes
        };

        if changes.is_empty() {
            trace!("tick: no changes");
        } else {
            debug!(summary = %changes.summary(), "tick");
        }
        for device in &changes.removed {
            debug!(device = device.id(), "device removed");
        }

        if !changes.added.is_empty() {
            self.notify(&DetectorEvent::DevicesAdded(changes.added.clone()));
        }
        if !changes.changed.is_empty() {
            self.notify(&DetectorEvent::DevicesChanged(changes.changed.clone()));
        }

        TickOutcome::Completed(changes)
    }

    fn notify(&self, event: &DetectorEvent) {
        // snapshot the list so listeners may (un)subscribe re-entrantly
        let listeners: Vec<Listener> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        trace!(event = event.name(), listeners = listeners.len(), "notify");
        for listener in listeners {
            listener(event);
        }
    }
}

fn run_worker<S: DeviceSource>(shared: Arc<Shared<S>>, stop: Receiver<()>, interval: Duration) {
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                shared.tick();
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("watch worker exiting");
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
