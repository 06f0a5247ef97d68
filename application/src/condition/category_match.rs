//! Matches the current term's bundle against a configured selection.

use super::{Condition, ConditionDefinition};
use crate::config::ContextSettings;
use crate::ports::category_catalog::CategoryCatalog;
use crate::ports::entity_store::StoreError;
use std::sync::Arc;
use termgate_domain::{
    CacheMetadata, CategoryId, CategoryOptions, ConditionConfig, ContextDefinition, ResolvedContext,
    summarize,
};
use tracing::{debug, warn};

/// Machine name of the bundle condition
pub const CATEGORY_CONDITION_ID: &str = "taxonomy_term_type";

const CONTEXT_LABEL: &str = "Taxonomy";

/// Condition on the bundle of the current taxonomy term.
///
/// Holds its own [`ConditionConfig`]; persistence is up to the caller.
/// The context it reads is described by the same [`ContextSettings`] the
/// resolver publishes under.
pub struct CategoryMatchCondition {
    catalog: Arc<dyn CategoryCatalog>,
    config: ConditionConfig,
    definition: ConditionDefinition,
    settings: ContextSettings,
}

impl CategoryMatchCondition {
    pub fn new(catalog: Arc<dyn CategoryCatalog>) -> Self {
        let settings = ContextSettings::default();
        Self {
            catalog,
            config: Self::default_configuration(),
            definition: Self::definition_for(&settings),
            settings,
        }
    }

    /// Read the context described by `settings` instead of the default one
    pub fn with_settings(mut self, settings: ContextSettings) -> Self {
        self.definition = Self::definition_for(&settings);
        self.settings = settings;
        self
    }

    fn definition_for(settings: &ContextSettings) -> ConditionDefinition {
        ConditionDefinition {
            id: CATEGORY_CONDITION_ID.to_string(),
            label: "Taxonomy Term Bundle".to_string(),
            context_name: settings.name.clone(),
            context: ContextDefinition::for_entity(&settings.entity_type, CONTEXT_LABEL),
        }
    }

    /// Use a previously stored configuration as-is
    pub fn with_configuration(mut self, config: ConditionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_configuration() -> ConditionConfig {
        ConditionConfig::default()
    }

    pub fn configuration(&self) -> &ConditionConfig {
        &self.config
    }

    pub fn set_negate(&mut self, negate: bool) {
        self.config.negate = negate;
    }

    /// Drop selected ids the catalog no longer knows
    pub fn prune_stale(&mut self) -> Result<Vec<CategoryId>, StoreError> {
        let options = self.catalog.options()?;
        let dropped = self.config.retain_known(|id| options.contains(id));
        if !dropped.is_empty() {
            debug!(condition = CATEGORY_CONDITION_ID, "Pruned stale bundles: {:?}", dropped);
        }
        Ok(dropped)
    }

    /// What a cached verdict of this condition varies by.
    ///
    /// Besides the context's cache context, the verdict depends on the
    /// bundle list, tagged `<entity type>_list`.
    pub fn cacheability(&self) -> CacheMetadata {
        CacheMetadata::new()
            .with_context(self.settings.cache_context.clone())
            .with_tag(format!("{}_list", self.settings.entity_type))
    }
}

impl Condition for CategoryMatchCondition {
    fn definition(&self) -> &ConditionDefinition {
        &self.definition
    }

    fn build_configuration_options(&self) -> Result<CategoryOptions, StoreError> {
        self.catalog.options()
    }

    fn set_configuration(&mut self, selected: &[CategoryId]) -> Result<Vec<CategoryId>, StoreError> {
        let options = self.catalog.options()?;

        let mut config = ConditionConfig::new()
            .with_bundles(selected.iter().filter(|id| !id.is_blank()).cloned())
            .with_negate(self.config.negate);
        let dropped = config.retain_known(|id| options.contains(id));
        if !dropped.is_empty() {
            debug!(condition = CATEGORY_CONDITION_ID, "Dropped unknown bundles: {:?}", dropped);
        }

        self.config = config;
        Ok(dropped)
    }

    fn evaluate(&self, context: &ResolvedContext) -> bool {
        self.config.verdict(context.bundle())
    }

    fn summary(&self) -> String {
        let options = match self.catalog.options() {
            Ok(options) => options,
            Err(e) => {
                warn!("Category catalog unavailable for summary: {}", e);
                CategoryOptions::default()
            }
        };
        summarize(&self.config, |id| options.label(id).map(str::to_string))
    }
}
