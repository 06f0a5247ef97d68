//! Entity read model

use crate::core::identifiers::{CategoryId, EntityId, EntityTypeTag};
use serde::{Deserialize, Serialize};

/// A record held by an external entity store.
///
/// Only the identity, label and bundle are ever read; nothing in this
/// workspace mutates an entity after loading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Entity type tag (e.g. `taxonomy_term`)
    #[serde(rename = "type")]
    pub entity_type: EntityTypeTag,
    pub label: String,
    /// Category the entity belongs to
    pub bundle: CategoryId,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        entity_type: EntityTypeTag,
        label: impl Into<String>,
        bundle: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            entity_type,
            label: label.into(),
            bundle: CategoryId::new(bundle),
        }
    }

    /// Shorthand for a taxonomy term
    pub fn term(id: impl Into<String>, label: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self::new(id, EntityTypeTag::taxonomy_term(), label, bundle)
    }

    /// Invalidation tag for this entity (`taxonomy_term:5`)
    pub fn cache_tag(&self) -> String {
        format!("{}:{}", self.entity_type, self.id)
    }

    pub fn is_of_type(&self, entity_type: &EntityTypeTag) -> bool {
        &self.entity_type == entity_type
    }
}
