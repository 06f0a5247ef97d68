//! Runtime contexts offered to other components.
//!
//! A context provider resolves a [`ResolvedContext`](resolved::ResolvedContext)
//! per request. Each context carries a [`ContextDefinition`](definition::ContextDefinition)
//! describing its data type and [`CacheMetadata`](cache::CacheMetadata)
//! declaring what downstream caches must vary by.

pub mod cache;
pub mod definition;
pub mod resolved;
