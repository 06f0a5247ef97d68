//! Infrastructure layer for termgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod routing;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileContextConfig, FileDataConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use fixtures::{FixtureData, FixtureError, InMemoryEntityStore, StaticCategoryCatalog};
pub use logging::JsonlDecisionLogger;
pub use routing::{CurrentRoute, RouteDefinition, RouteTable, RouteTableError};
pub use storage::JsonConditionConfigStore;
