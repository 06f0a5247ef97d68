//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod category_catalog;
pub mod config_store;
pub mod decision_logger;
pub mod entity_store;
pub mod route_match;
