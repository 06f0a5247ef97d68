//! Context definitions

use crate::core::identifiers::EntityTypeTag;
use serde::{Deserialize, Serialize};

/// Describes the value a context carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDefinition {
    /// Data type, e.g. `entity:taxonomy_term`
    pub data_type: String,
    /// Human-readable label, e.g. "Current Taxonomy Term"
    pub label: String,
    /// Whether consumers may rely on a value being present
    pub required: bool,
}

impl ContextDefinition {
    pub fn new(data_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            label: label.into(),
            required: false,
        }
    }

    pub fn for_entity(entity_type: &EntityTypeTag, label: impl Into<String>) -> Self {
        Self::new(entity_type.data_type(), label)
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Whether a context with definition `other` can satisfy this one
    pub fn accepts(&self, other: &ContextDefinition) -> bool {
        self.data_type == other.data_type
    }
}
