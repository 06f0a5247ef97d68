//! Fixture file parsing

use super::memory::{InMemoryEntityStore, StaticCategoryCatalog};
use crate::routing::{RouteDefinition, RouteTable, RouteTableError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use termgate_domain::{Category, Entity};
use thiserror::Error;
use tracing::debug;

/// Errors reading a fixture file
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of a fixture file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureData {
    pub categories: Vec<Category>,
    pub entities: Vec<Entity>,
    pub routes: Vec<RouteDefinition>,
}

impl FixtureData {
    pub fn from_toml_str(content: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_toml_str(&content)?;
        debug!(
            "Loaded {} categories, {} entities, {} routes from {}",
            data.categories.len(),
            data.entities.len(),
            data.routes.len(),
            path.display()
        );
        Ok(data)
    }

    pub fn entity_store(&self) -> InMemoryEntityStore {
        InMemoryEntityStore::from_entities(self.entities.iter().cloned())
    }

    pub fn catalog(&self) -> StaticCategoryCatalog {
        StaticCategoryCatalog::new(self.categories.clone())
    }

    pub fn route_table(&self) -> Result<RouteTable, RouteTableError> {
        RouteTable::from_definitions(self.routes.iter().cloned())
    }
}
