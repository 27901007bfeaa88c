//! Device Detector
//!
//! Owns the last known snapshot and turns successive samples into
//! notifications.
//!
//! ## States
//!
//! - `Idle` - no timer armed; `get_devices()` and `tick()` still work
//! - `Watching` - a worker thread samples every `interval`
//!
//! A tick is sample, diff, store, notify. Listeners run on the worker
//! thread and the next tick is only armed after they return, so a slow
//! listener stretches the period instead of overlapping ticks. A
//! single-flight guard additionally rejects a tick that starts while
//! another one is still running (e.g. a manual `tick()` racing the worker).
//!
//! ## Usage
//!
//! ```ignore
//! let detector = DeviceDetector::new(AdbClient::new("adb"), Duration::from_secs(1));
//! let handle = detector.handle();
//! detector.subscribe(move |event| match event {
//!     DetectorEvent::DevicesAdded(devices) => { /* ... */ }
//!     DetectorEvent::DevicesChanged(devices) => { /* ... */ }
//!     DetectorEvent::Error(_) => { handle.unwatch(); }
//! });
//! detector.watch()?;
//! ```

mod device_detector;
mod event;


pub use device_detector::{DetectorState, DeviceDetector, ListenerId, TickOutcome, WatchHandle};
pub use event::DetectorEvent;
