//! Identifier value objects

use super::error::RouteError;
use serde::{Deserialize, Serialize};

/// Entity type tag of taxonomy terms
pub const TAXONOMY_TERM: &str = "taxonomy_term";

/// Prefix of entity data types in route declarations (`entity:taxonomy_term`)
pub const ENTITY_DATA_TYPE_PREFIX: &str = "entity:";

/// Identifier of an entity inside its store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::new(s)
    }
}

/// Kind of entity (e.g. `taxonomy_term`, `node`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTypeTag(String);

impl EntityTypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn taxonomy_term() -> Self {
        Self::new(TAXONOMY_TERM)
    }

    /// Parse the tag out of an `entity:<tag>` data type.
    ///
    /// Returns `Ok(None)` when `data_type` does not describe an entity at all.
    pub fn from_data_type(
        parameter: &str,
        data_type: &str,
    ) -> Result<Option<Self>, RouteError> {
        let Some(tag) = data_type.trim().strip_prefix(ENTITY_DATA_TYPE_PREFIX) else {
            return Ok(None);
        };
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(RouteError::EmptyEntityType {
                parameter: parameter.to_string(),
            });
        }
        Ok(Some(Self::new(tag)))
    }

    /// The `entity:<tag>` data type string
    pub fn data_type(&self) -> String {
        format!("{}{}", ENTITY_DATA_TYPE_PREFIX, self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityTypeTag {
    fn default() -> Self {
        Self::taxonomy_term()
    }
}

impl std::fmt::Display for EntityTypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityTypeTag {
    fn from(s: &str) -> Self {
        EntityTypeTag::new(s)
    }
}

/// Identifier of a category (term bundle)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unchecked checkbox values arrive as empty strings
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        CategoryId::new(s)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        CategoryId::new(s)
    }
}
