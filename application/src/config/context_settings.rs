//! Context settings: what the route entity resolver offers.
//!
//! [`ContextSettings`] names the context, the entity type it looks up and
//! the cache context it declares. The defaults describe the current
//! taxonomy term.

use serde::{Deserialize, Serialize};
use termgate_domain::{ContextDefinition, EntityTypeTag, TAXONOMY_TERM, TAXONOMY_TERM_CACHE_CONTEXT};

/// Label of the default context
pub const CURRENT_TERM_LABEL: &str = "Current Taxonomy Term";

/// Settings for [`RouteEntityResolver`](crate::context_provider::RouteEntityResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSettings {
    /// Key of the context in the runtime context map
    pub name: String,
    /// Human-readable context label
    pub label: String,
    /// Entity type looked up in the route
    pub entity_type: EntityTypeTag,
    /// Cache context declared on every resolved context
    pub cache_context: String,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            name: TAXONOMY_TERM.to_string(),
            label: CURRENT_TERM_LABEL.to_string(),
            entity_type: EntityTypeTag::taxonomy_term(),
            cache_context: TAXONOMY_TERM_CACHE_CONTEXT.to_string(),
        }
    }
}

impl ContextSettings {
    // ==================== Builder Methods ====================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityTypeTag) -> Self {
        self.entity_type = entity_type;
        self
    }

    pub fn with_cache_context(mut self, cache_context: impl Into<String>) -> Self {
        self.cache_context = cache_context.into();
        self
    }

    /// Definition of the context these settings describe
    pub fn definition(&self) -> ContextDefinition {
        ContextDefinition::for_entity(&self.entity_type, self.label.clone())
    }
}
