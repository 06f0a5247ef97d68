//! Configure condition use case
//!
//! Applies an administrator's bundle selection to a condition instance and
//! persists it. This is the form-submit path: unknown ids are dropped, not
//! rejected, since the form may have been rendered before the catalog
//! changed.

use crate::condition::{CategoryMatchCondition, Condition};
use crate::ports::category_catalog::CategoryCatalog;
use crate::ports::config_store::ConditionConfigStore;
use crate::ports::entity_store::StoreError;
use std::sync::Arc;
use termgate_domain::{CategoryId, ConditionConfig};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while configuring a condition
#[derive(Error, Debug)]
pub enum ConfigureConditionError {
    #[error("Condition instance id cannot be empty")]
    EmptyInstanceId,

    #[error("Failed to read category catalog: {0}")]
    Catalog(#[source] StoreError),

    #[error("Failed to save configuration: {0}")]
    Save(#[source] StoreError),
}

/// Input for the ConfigureCondition use case.
#[derive(Debug, Clone)]
pub struct ConfigureConditionInput {
    /// Key the configuration is stored under
    pub instance_id: String,
    /// Selected bundle ids as submitted
    pub bundles: Vec<CategoryId>,
    pub negate: bool,
}

impl ConfigureConditionInput {
    pub fn new(instance_id: impl Into<String>, bundles: Vec<CategoryId>) -> Self {
        Self {
            instance_id: instance_id.into(),
            bundles,
            negate: false,
        }
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }
}

/// Output from the ConfigureCondition use case.
#[derive(Debug, Clone)]
pub struct ConfigureConditionOutput {
    /// Configuration as saved
    pub config: ConditionConfig,
    /// Submitted ids the catalog did not know
    pub dropped: Vec<CategoryId>,
    pub summary: String,
}

/// Use case for saving a bundle condition's configuration
pub struct ConfigureConditionUseCase {
    catalog: Arc<dyn CategoryCatalog>,
    store: Arc<dyn ConditionConfigStore>,
}

impl ConfigureConditionUseCase {
    pub fn new(catalog: Arc<dyn CategoryCatalog>, store: Arc<dyn ConditionConfigStore>) -> Self {
        Self { catalog, store }
    }

    pub fn execute(
        &self,
        input: ConfigureConditionInput,
    ) -> Result<ConfigureConditionOutput, ConfigureConditionError> {
        if input.instance_id.trim().is_empty() {
            return Err(ConfigureConditionError::EmptyInstanceId);
        }

        let mut condition = CategoryMatchCondition::new(self.catalog.clone());
        condition.set_negate(input.negate);
        let dropped = condition
            .set_configuration(&input.bundles)
            .map_err(ConfigureConditionError::Catalog)?;

        let config = condition.configuration().clone();
        self.store
            .save(&input.instance_id, &config)
            .map_err(ConfigureConditionError::Save)?;

        info!(
            instance = %input.instance_id,
            "Saved {} bundle(s), negate={}",
            config.bundles.len(),
            config.negate
        );

        Ok(ConfigureConditionOutput {
            summary: condition.summary(),
            config,
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryCatalog, MemoryConfigStore};

    fn ids(raw: &[&str]) -> Vec<CategoryId> {
        raw.iter().map(|s| CategoryId::new(*s)).collect()
    }

    #[test]
    fn test_configure_saves_filtered_selection() {
        let store = Arc::new(MemoryConfigStore::default());
        let use_case = ConfigureConditionUseCase::new(Arc::new(MemoryCatalog::fruit_veg()), store.clone());

        let output = use_case
            .execute(ConfigureConditionInput::new("front_block", ids(&["1", "7"])).with_negate(true))
            .unwrap();

        assert_eq!(output.dropped, ids(&["7"]));
        assert_eq!(output.summary, "Category is not one of: Fruit");

        let saved = store.load("front_block").unwrap().unwrap();
        assert_eq!(saved, output.config);
        assert!(saved.negate);
        assert!(saved.contains(&CategoryId::new("1")));
    }

    #[test]
    fn test_configure_empty_selection_is_unconfigured() {
        let use_case = ConfigureConditionUseCase::new(
            Arc::new(MemoryCatalog::fruit_veg()),
            Arc::new(MemoryConfigStore::default()),
        );
        let output = use_case
            .execute(ConfigureConditionInput::new("front_block", Vec::new()))
            .unwrap();
        assert!(!output.config.is_configured());
        assert_eq!(output.summary, termgate_domain::UNCONFIGURED_SUMMARY);
    }

    #[test]
    fn test_configure_rejects_empty_instance_id() {
        let use_case = ConfigureConditionUseCase::new(
            Arc::new(MemoryCatalog::fruit_veg()),
            Arc::new(MemoryConfigStore::default()),
        );
        let err = use_case
            .execute(ConfigureConditionInput::new("  ", ids(&["1"])))
            .unwrap_err();
        assert!(matches!(err, ConfigureConditionError::EmptyInstanceId));
    }

    #[test]
    fn test_configure_save_failure() {
        let store = MemoryConfigStore {
            fail: true,
            ..Default::default()
        };
        let use_case = ConfigureConditionUseCase::new(Arc::new(MemoryCatalog::fruit_veg()), Arc::new(store));
        let err = use_case
            .execute(ConfigureConditionInput::new("front_block", ids(&["1"])))
            .unwrap_err();
        assert!(matches!(err, ConfigureConditionError::Save(_)));
    }
}
