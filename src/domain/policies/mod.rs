//! Domain Policies

pub mod command;

pub use command::{normalize_command, DEFAULT_KEYWORD};
