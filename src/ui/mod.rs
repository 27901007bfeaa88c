//! Terminal rendering for the adbmux binary

pub mod blocks;
pub mod context;
pub mod error;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
