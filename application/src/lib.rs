//! Application layer for termgate
//!
//! This crate contains the context provider, the bundle condition, port
//! definitions and use cases. It depends only on the domain layer.

pub mod condition;
pub mod config;
pub mod context_provider;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use condition::{CATEGORY_CONDITION_ID, CategoryMatchCondition, Condition, ConditionDefinition};
pub use config::{CURRENT_TERM_LABEL, ContextSettings};
pub use context_provider::{ContextProvider, RouteEntityResolver};
pub use ports::{
    category_catalog::CategoryCatalog,
    config_store::ConditionConfigStore,
    decision_logger::{DecisionLogger, DecisionRecord, NoDecisionLog},
    entity_store::{EntityStore, StoreError},
    route_match::{NoRoute, RouteMatchPort},
};
pub use use_cases::configure_condition::{
    ConfigureConditionError, ConfigureConditionInput, ConfigureConditionOutput,
    ConfigureConditionUseCase,
};
pub use use_cases::evaluate_condition::{
    EvaluateConditionError, EvaluateConditionInput, EvaluateConditionUseCase, EvaluationOutcome,
};
