//! The matched route of the current request

use super::declaration::{ParameterDeclaration, ParameterKind};
use crate::core::error::RouteError;
use crate::core::identifiers::{EntityId, EntityTypeTag};
use serde::{Deserialize, Serialize};

/// The current request's matched route (Value Object)
///
/// Holds the raw parameter values in match order plus the route options that
/// declare which parameters are entities. Created per request by the router
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Route name (e.g. `entity.taxonomy_term.canonical`)
    pub name: String,
    /// Path that was matched
    pub path: String,
    parameters: Vec<(String, String)>,
    declarations: Vec<ParameterDeclaration>,
}

impl RouteContext {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parameters: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    pub fn with_declaration(mut self, declaration: ParameterDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Raw value of a parameter (first occurrence wins)
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn declarations(&self) -> &[ParameterDeclaration] {
        &self.declarations
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Find the parameter declared as an entity of `entity_type`.
    ///
    /// Returns the parameter name, `Ok(None)` when no parameter carries that
    /// entity type, or a [`RouteError`] when the declarations contradict
    /// each other.
    pub fn entity_parameter(
        &self,
        entity_type: &EntityTypeTag,
    ) -> Result<Option<&str>, RouteError> {
        let mut unique: Vec<&ParameterDeclaration> = Vec::new();
        for declaration in &self.declarations {
            if let Some(existing) = unique.iter().find(|d| d.name == declaration.name) {
                if let Some(err) = existing.conflicts_with(declaration) {
                    return Err(err);
                }
                continue;
            }
            unique.push(declaration);
        }

        let mut found: Option<&str> = None;
        for declaration in unique {
            match declaration.kind()? {
                ParameterKind::Entity(tag) if &tag == entity_type => {
                    if let Some(first) = found {
                        return Err(RouteError::DuplicateEntityParameter {
                            entity_type: entity_type.to_string(),
                            first: first.to_string(),
                            second: declaration.name.clone(),
                        });
                    }
                    found = Some(declaration.name.as_str());
                }
                _ => {}
            }
        }
        Ok(found)
    }

    /// Id of the entity of `entity_type` carried by this route, if any.
    ///
    /// A declared parameter with no value (or a blank one) yields `Ok(None)`.
    pub fn entity_id(&self, entity_type: &EntityTypeTag) -> Result<Option<EntityId>, RouteError> {
        let Some(name) = self.entity_parameter(entity_type)? else {
            return Ok(None);
        };
        Ok(self
            .parameter(name)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(EntityId::new))
    }
}
