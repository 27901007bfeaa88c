//! Application Layer
//!
//! Orchestrates the domain against the host ports.
//!
//! - `DeviceDetector` - Idle/Watching state machine that samples, diffs and notifies
//! - `MultiplexUseCase` - One-shot run plus re-runs driven by detector events

pub mod detector;
pub mod multiplexer;

pub use detector::{
    DetectorEvent, DetectorState, DeviceDetector, ListenerId, TickOutcome, WatchHandle,
};
pub use multiplexer::{
    BatchReport, BatchRunner, MultiplexOptions, MultiplexUseCase, MuxEvent, RunKind,
};
