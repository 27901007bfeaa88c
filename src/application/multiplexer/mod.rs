//! Multiplexer Use Case
//!
//! Runs one command on every online device, then (optionally) again on each
//! batch of devices the detector reports as added or changed.
//!
//! - `BatchRunner` - partition + sequential, fail-fast execution of one batch
//! - `MultiplexUseCase` - one-shot run and watch wiring
//! - `MuxEvent` - what happened, for the presentation layer to render
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = MultiplexUseCase::new(client.clone(), client, options);
//! use_case.start(running, |event| render(event))?;
//! ```

mod batch;
mod event;
mod use_case;


pub use batch::{BatchReport, BatchRunner};
pub use event::{MultiplexOptions, MuxEvent, RunKind};
pub use use_case::MultiplexUseCase;
