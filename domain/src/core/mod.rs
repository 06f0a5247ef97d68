//! Core domain concepts shared across all subdomains.
//!
//! - [`identifiers`]: entity, entity type and category identifiers
//! - [`error::RouteError`]: malformed route declarations

pub mod error;
pub mod identifiers;
