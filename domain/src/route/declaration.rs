//! Route parameter declarations

use crate::core::error::RouteError;
use crate::core::identifiers::EntityTypeTag;
use serde::{Deserialize, Serialize};

/// A route option declaring what a parameter holds.
///
/// `data_type` is kept verbatim (`entity:taxonomy_term`, `string`, ...) and
/// classified on demand, so a malformed declaration only matters to callers
/// that actually look at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

/// Classified parameter declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// The parameter holds the id of an entity of this type
    Entity(EntityTypeTag),
    /// Anything else (the raw type string)
    Other(String),
}

impl ParameterDeclaration {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    /// Declaration of an entity parameter
    pub fn entity(name: impl Into<String>, entity_type: &EntityTypeTag) -> Self {
        Self::new(name, entity_type.data_type())
    }

    pub fn kind(&self) -> Result<ParameterKind, RouteError> {
        match EntityTypeTag::from_data_type(&self.name, &self.data_type)? {
            Some(tag) => Ok(ParameterKind::Entity(tag)),
            None => Ok(ParameterKind::Other(self.data_type.trim().to_string())),
        }
    }

    /// Whether two declarations describe the same type
    ///
    /// Declarations that cannot be classified fall back to comparing the
    /// trimmed type strings; the classification error surfaces elsewhere.
    fn same_type(&self, other: &ParameterDeclaration) -> bool {
        match (self.kind(), other.kind()) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.data_type.trim() == other.data_type.trim(),
        }
    }

    pub(crate) fn conflicts_with(&self, other: &ParameterDeclaration) -> Option<RouteError> {
        if self.name == other.name && !self.same_type(other) {
            Some(RouteError::ConflictingDeclaration {
                parameter: self.name.clone(),
                first: self.data_type.clone(),
                second: other.data_type.clone(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_declaration_kind() {
        let decl = ParameterDeclaration::entity("taxonomy_term", &EntityTypeTag::taxonomy_term());
        assert_eq!(decl.data_type, "entity:taxonomy_term");
        assert_eq!(
            decl.kind().unwrap(),
            ParameterKind::Entity(EntityTypeTag::taxonomy_term())
        );
    }

    #[test]
    fn test_other_declaration_kind() {
        let decl = ParameterDeclaration::new("page", "integer");
        assert_eq!(decl.kind().unwrap(), ParameterKind::Other("integer".to_string()));
    }

    #[test]
    fn test_conflict_detection() {
        let a = ParameterDeclaration::new("term", "entity:taxonomy_term");
        let b = ParameterDeclaration::new("term", "entity:node");
        let c = ParameterDeclaration::new("term", " entity:taxonomy_term ");
        assert!(a.conflicts_with(&b).is_some());
        assert!(a.conflicts_with(&c).is_none());
    }

    #[test]
    fn test_spacing_inside_entity_type_is_not_a_conflict() {
        let a = ParameterDeclaration::new("term", "entity:taxonomy_term");
        let b = ParameterDeclaration::new("term", "entity: taxonomy_term");
        assert_eq!(a.kind().unwrap(), b.kind().unwrap());
        assert!(a.conflicts_with(&b).is_none());
        assert!(b.conflicts_with(&a).is_none());
    }

    #[test]
    fn test_other_kind_is_trimmed() {
        let a = ParameterDeclaration::new("page", "integer");
        let b = ParameterDeclaration::new("page", " integer ");
        assert_eq!(b.kind().unwrap(), ParameterKind::Other("integer".to_string()));
        assert!(a.conflicts_with(&b).is_none());
    }
}
