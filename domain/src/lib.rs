//! Domain layer for termgate
//!
//! This crate contains the entities, value objects and pure rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Route context
//!
//! A [`RouteContext`] is the matched route of the current request. Its
//! parameter declarations say which raw values are entity ids
//! (`entity:taxonomy_term`).
//!
//! ## Resolved context
//!
//! A [`ResolvedContext`] is the "current taxonomy term" offered to other
//! components: present or absent, always annotated with [`CacheMetadata`].
//!
//! ## Condition configuration
//!
//! A [`ConditionConfig`] is the set of selected bundles plus a negate flag.
//! [`ConditionConfig::verdict`] is the whole matching rule.

pub mod condition;
pub mod context;
pub mod core;
pub mod entity;
pub mod route;

// Re-export commonly used types
pub use condition::{
    config::ConditionConfig,
    summary::{UNCONFIGURED_SUMMARY, summarize},
};
pub use context::{
    cache::{CacheMetadata, MaxAge, TAXONOMY_TERM_CACHE_CONTEXT, TAXONOMY_TERM_LIST_TAG},
    definition::ContextDefinition,
    resolved::{ResolvedContext, RuntimeContexts},
};
pub use core::{
    error::RouteError,
    identifiers::{CategoryId, EntityId, EntityTypeTag, TAXONOMY_TERM},
};
pub use entity::{
    category::{Category, CategoryOptions},
    entities::Entity,
};
pub use route::{
    declaration::{ParameterDeclaration, ParameterKind},
    route_context::RouteContext,
};
