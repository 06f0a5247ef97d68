//! In-memory ports shared by use case tests

use crate::ports::category_catalog::CategoryCatalog;
use crate::ports::config_store::ConditionConfigStore;
use crate::ports::decision_logger::{DecisionLogger, DecisionRecord};
use crate::ports::entity_store::{EntityStore, StoreError};
use crate::ports::route_match::RouteMatchPort;
use std::collections::HashMap;
use std::sync::Mutex;
use termgate_domain::{
    Category, ConditionConfig, Entity, EntityId, EntityTypeTag, ParameterDeclaration, RouteContext,
};

pub struct MemoryCatalog(pub Vec<Category>);

impl MemoryCatalog {
    pub fn fruit_veg() -> Self {
        Self(vec![Category::new("1", "Fruit"), Category::new("2", "Veg")])
    }
}

impl CategoryCatalog for MemoryCatalog {
    fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct MemoryConfigStore {
    pub configs: Mutex<HashMap<String, ConditionConfig>>,
    pub fail: bool,
}

impl ConditionConfigStore for MemoryConfigStore {
    fn load(&self, instance_id: &str) -> Result<Option<ConditionConfig>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("config store down".to_string()));
        }
        Ok(self.configs.lock().unwrap().get(instance_id).cloned())
    }

    fn save(&self, instance_id: &str, config: &ConditionConfig) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("config store down".to_string()));
        }
        self.configs
            .lock()
            .unwrap()
            .insert(instance_id.to_string(), config.clone());
        Ok(())
    }
}

pub struct MemoryEntities(pub Vec<Entity>);

impl MemoryEntities {
    pub fn terms() -> Self {
        Self(vec![
            Entity::term("10", "Apple", "1"),
            Entity::term("20", "Carrot", "2"),
        ])
    }
}

impl EntityStore for MemoryEntities {
    fn load(&self, entity_type: &EntityTypeTag, id: &EntityId) -> Result<Option<Entity>, StoreError> {
        Ok(self
            .0
            .iter()
            .find(|e| &e.entity_type == entity_type && &e.id == id)
            .cloned())
    }
}

pub struct FixedRoute(pub Option<RouteContext>);

impl FixedRoute {
    pub fn term(id: &str) -> Self {
        Self(Some(
            RouteContext::new("entity.taxonomy_term.canonical", format!("/taxonomy/term/{}", id))
                .with_parameter("taxonomy_term", id)
                .with_declaration(ParameterDeclaration::entity(
                    "taxonomy_term",
                    &EntityTypeTag::taxonomy_term(),
                )),
        ))
    }
}

impl RouteMatchPort for FixedRoute {
    fn current_route(&self) -> Option<RouteContext> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingLogger(pub Mutex<Vec<DecisionRecord>>);

impl DecisionLogger for RecordingLogger {
    fn log(&self, record: DecisionRecord) {
        self.0.lock().unwrap().push(record);
    }
}
