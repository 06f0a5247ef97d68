//! Application-level configuration.
//!
//! - [`ContextSettings`]: name, label, entity type and cache context of the
//!   route entity context

pub mod context_settings;

pub use context_settings::{CURRENT_TERM_LABEL, ContextSettings};
