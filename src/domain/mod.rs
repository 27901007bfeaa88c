//! Domain Layer
//!
//! Pure device model and rules, no process spawning.
//!
//! ## Structure
//!
//! - `entities/` - Device and Snapshot
//! - `services/` - Snapshot differ
//! - `policies/` - Command normalization
//! - `ports/` - Interfaces for the host device subsystem

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
