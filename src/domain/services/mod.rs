//! Domain Services
//!
//! Stateless logic over domain entities.

pub mod differ;

pub use differ::{diff, ChangeSet};
