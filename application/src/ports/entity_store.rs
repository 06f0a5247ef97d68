//! Entity store port
//!
//! Defines the read-only access the context provider needs to entities.

use termgate_domain::{Entity, EntityId, EntityTypeTag};
use thiserror::Error;

/// Errors raised by store adapters
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt store data: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for loading entities by type and id
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait EntityStore: Send + Sync {
    /// Load one entity. A missing entity is `Ok(None)`, not an error.
    fn load(&self, entity_type: &EntityTypeTag, id: &EntityId) -> Result<Option<Entity>, StoreError>;
}
