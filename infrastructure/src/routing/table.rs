//! Route table backed by `matchit`

use matchit::Router as MatchitRouter;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use termgate_domain::{ParameterDeclaration, RouteContext};
use thiserror::Error;
use tracing::trace;

/// Errors building a route table
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("Route '{name}' has invalid or conflicting path '{path}': {source}")]
    InvalidPath {
        name: String,
        path: String,
        #[source]
        source: matchit::InsertError,
    },

    #[error("Route name '{0}' is defined more than once")]
    DuplicateName(String),
}

/// One declared route.
///
/// `parameters` maps a path parameter to its declared data type
/// (`entity:taxonomy_term`, `string`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Route name (e.g. `entity.taxonomy_term.canonical`)
    pub name: String,
    /// Path pattern, e.g. `/taxonomy/term/{taxonomy_term}`
    pub path: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl RouteDefinition {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, data_type: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), data_type.into());
        self
    }
}

/// Path -> route lookup
///
/// - `routes`: every definition, indexed by the value stored in the router
/// - `path_router`: `matchit` radix tree over the path patterns
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    names: HashSet<String>,
    path_router: MatchitRouter<usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashSet::new(),
            path_router: MatchitRouter::new(),
        }
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RouteDefinition>,
    ) -> Result<Self, RouteTableError> {
        let mut table = Self::new();
        for definition in definitions {
            table.insert(definition)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, definition: RouteDefinition) -> Result<(), RouteTableError> {
        if self.names.contains(&definition.name) {
            return Err(RouteTableError::DuplicateName(definition.name));
        }

        let index = self.routes.len();
        self.path_router
            .insert(definition.path.clone(), index)
            .map_err(|source| RouteTableError::InvalidPath {
                name: definition.name.clone(),
                path: definition.path.clone(),
                source,
            })?;

        self.names.insert(definition.name.clone());
        self.routes.push(definition);
        Ok(())
    }

    /// Match a request path (query string and fragment are ignored).
    ///
    /// Returns `None` when no route matches.
    pub fn match_path(&self, path: &str) -> Option<RouteContext> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let matched = match self.path_router.at(path) {
            Ok(matched) => matched,
            Err(_) => {
                trace!("No route matches {}", path);
                return None;
            }
        };
        let definition = self.routes.get(*matched.value)?;

        let mut route = RouteContext::new(definition.name.clone(), path);
        for (name, value) in matched.params.iter() {
            route = route.with_parameter(name, value);
        }
        for (name, data_type) in &definition.parameters {
            route = route.with_declaration(ParameterDeclaration::new(name.clone(), data_type.clone()));
        }
        Some(route)
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
