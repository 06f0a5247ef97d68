//! In-memory adapters for the entity store and category catalog ports

use std::collections::HashMap;
use termgate_application::{CategoryCatalog, EntityStore, StoreError};
use termgate_domain::{Category, Entity, EntityId, EntityTypeTag};

/// Entity store over a fixed set of entities.
///
/// Read-only after construction, so it is `Send + Sync` without locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityStore {
    entities: HashMap<(EntityTypeTag, EntityId), Entity>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entities with the same type and id replace earlier ones
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut store = Self::new();
        for entity in entities {
            store.insert(entity);
        }
        store
    }

    pub fn insert(&mut self, entity: Entity) {
        self.entities
            .insert((entity.entity_type.clone(), entity.id.clone()), entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityStore for InMemoryEntityStore {
    fn load(&self, entity_type: &EntityTypeTag, id: &EntityId) -> Result<Option<Entity>, StoreError> {
        Ok(self.entities.get(&(entity_type.clone(), id.clone())).cloned())
    }
}

/// Catalog over a fixed category list, in file order
#[derive(Debug, Clone, Default)]
pub struct StaticCategoryCatalog {
    categories: Vec<Category>,
}

impl StaticCategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl CategoryCatalog for StaticCategoryCatalog {
    fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keys_by_type_and_id() {
        let store = InMemoryEntityStore::from_entities(vec![
            Entity::term("1", "Apple", "fruit"),
            Entity::new("1", EntityTypeTag::new("node"), "Article", "article"),
        ]);
        assert_eq!(store.len(), 2);

        let term = store
            .load(&EntityTypeTag::taxonomy_term(), &EntityId::new("1"))
            .unwrap()
            .unwrap();
        assert_eq!(term.label, "Apple");
        assert!(
            store
                .load(&EntityTypeTag::taxonomy_term(), &EntityId::new("2"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_catalog_keeps_file_order() {
        let catalog = StaticCategoryCatalog::new(vec![Category::new("2", "Veg"), Category::new("1", "Fruit")]);
        let ids: Vec<String> = catalog
            .list_all()
            .unwrap()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);

        let labels: Vec<String> = catalog.options().unwrap().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Fruit", "Veg"]);
    }
}
