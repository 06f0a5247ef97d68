//! Resolved runtime contexts

use super::cache::CacheMetadata;
use super::definition::ContextDefinition;
use crate::core::identifiers::CategoryId;
use crate::entity::entities::Entity;
use serde::Serialize;
use std::collections::BTreeMap;

/// A typed, possibly empty reference to an entity, with cacheability.
///
/// "No entity on this route" is a normal state represented by an absent
/// value, never by an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContext {
    definition: ContextDefinition,
    value: Option<Entity>,
    cacheability: CacheMetadata,
}

impl ResolvedContext {
    pub fn present(definition: ContextDefinition, entity: Entity, cacheability: CacheMetadata) -> Self {
        Self {
            definition,
            value: Some(entity),
            cacheability,
        }
    }

    pub fn absent(definition: ContextDefinition, cacheability: CacheMetadata) -> Self {
        Self {
            definition,
            value: None,
            cacheability,
        }
    }

    pub fn definition(&self) -> &ContextDefinition {
        &self.definition
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.value.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Category of the carried entity
    pub fn bundle(&self) -> Option<&CategoryId> {
        self.value.as_ref().map(|e| &e.bundle)
    }

    pub fn cacheability(&self) -> &CacheMetadata {
        &self.cacheability
    }
}

/// Runtime contexts keyed by context name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuntimeContexts {
    contexts: BTreeMap<String, ResolvedContext>,
}

impl RuntimeContexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, context: ResolvedContext) -> Self {
        self.insert(name, context);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, context: ResolvedContext) {
        self.contexts.insert(name.into(), context);
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedContext> {
        self.contexts.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedContext)> {
        self.contexts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the named contexts; an empty filter keeps everything
    pub fn retain_named(&mut self, names: &[&str]) {
        if names.is_empty() {
            return;
        }
        self.contexts.retain(|k, _| names.contains(&k.as_str()));
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
