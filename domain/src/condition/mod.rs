//! Condition rules that need no I/O.

pub mod config;
pub mod summary;
