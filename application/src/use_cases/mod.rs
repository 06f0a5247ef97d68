//! Use cases
//!
//! Application-level operations that compose the context provider and the
//! condition the way a host page build would.

pub mod configure_condition;
pub mod evaluate_condition;
#[cfg(test)]
pub(crate) mod test_support;
