//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. Everything that spawns a
//! process lives here.
//!
//! ## Structure
//!
//! - `adb/` - adb-backed device listing and command execution

pub mod adb;

pub use adb::AdbClient;
