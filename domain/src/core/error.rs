//! Domain error types

use thiserror::Error;

/// Ways a route's parameter declarations can be malformed.
///
/// The resolver never surfaces these to callers. They are logged and the
/// route is treated as carrying no entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("parameter '{parameter}' is declared as both '{first}' and '{second}'")]
    ConflictingDeclaration {
        parameter: String,
        first: String,
        second: String,
    },

    #[error("parameters '{first}' and '{second}' both declare entity type '{entity_type}'")]
    DuplicateEntityParameter {
        entity_type: String,
        first: String,
        second: String,
    },

    #[error("parameter '{parameter}' declares an entity without a type")]
    EmptyEntityType { parameter: String },
}

impl RouteError {
    /// Name of the parameter the error was detected on
    pub fn parameter(&self) -> &str {
        match self {
            RouteError::ConflictingDeclaration { parameter, .. } => parameter,
            RouteError::DuplicateEntityParameter { second, .. } => second,
            RouteError::EmptyEntityType { parameter } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_declaration_display() {
        let error = RouteError::ConflictingDeclaration {
            parameter: "taxonomy_term".to_string(),
            first: "entity:taxonomy_term".to_string(),
            second: "entity:node".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "parameter 'taxonomy_term' is declared as both 'entity:taxonomy_term' and 'entity:node'"
        );
        assert_eq!(error.parameter(), "taxonomy_term");
    }

    #[test]
    fn test_duplicate_entity_parameter_points_at_second() {
        let error = RouteError::DuplicateEntityParameter {
            entity_type: "taxonomy_term".to_string(),
            first: "term".to_string(),
            second: "parent".to_string(),
        };
        assert_eq!(error.parameter(), "parent");
    }
}
