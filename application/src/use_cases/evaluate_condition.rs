//! Evaluate condition use case
//!
//! Loads a condition instance's stored configuration, asks the context
//! provider for the context the condition reads and returns the verdict
//! together with the cache metadata a caller needs to cache it.

use crate::condition::{CategoryMatchCondition, Condition};
use crate::config::ContextSettings;
use crate::context_provider::ContextProvider;
use crate::ports::category_catalog::CategoryCatalog;
use crate::ports::config_store::ConditionConfigStore;
use crate::ports::decision_logger::{DecisionLogger, DecisionRecord, NoDecisionLog};
use crate::ports::entity_store::StoreError;
use serde::Serialize;
use std::sync::Arc;
use termgate_domain::{CacheMetadata, CategoryId, ConditionConfig, ResolvedContext};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while evaluating a condition
#[derive(Error, Debug)]
pub enum EvaluateConditionError {
    #[error("Condition instance id cannot be empty")]
    EmptyInstanceId,

    #[error("Failed to load configuration for '{instance_id}': {source}")]
    LoadConfig {
        instance_id: String,
        #[source]
        source: StoreError,
    },
}

/// Input for the EvaluateCondition use case.
#[derive(Debug, Clone)]
pub struct EvaluateConditionInput {
    pub instance_id: String,
}

impl EvaluateConditionInput {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

/// Result of evaluating one condition instance
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutcome {
    pub instance_id: String,
    /// Context the condition was evaluated against
    pub context: ResolvedContext,
    /// Configuration in effect, stale bundles removed
    pub config: ConditionConfig,
    /// Stored bundles the catalog no longer knows
    pub stale: Vec<CategoryId>,
    pub matched: bool,
    pub summary: String,
    /// Context cacheability merged with the condition's own
    pub cacheability: CacheMetadata,
}

/// Use case for evaluating a stored bundle condition on the current route
pub struct EvaluateConditionUseCase {
    provider: Arc<dyn ContextProvider>,
    catalog: Arc<dyn CategoryCatalog>,
    store: Arc<dyn ConditionConfigStore>,
    logger: Arc<dyn DecisionLogger>,
    settings: ContextSettings,
}

impl EvaluateConditionUseCase {
    pub fn new(
        provider: Arc<dyn ContextProvider>,
        catalog: Arc<dyn CategoryCatalog>,
        store: Arc<dyn ConditionConfigStore>,
    ) -> Self {
        Self {
            provider,
            catalog,
            store,
            logger: Arc::new(NoDecisionLog),
            settings: ContextSettings::default(),
        }
    }

    /// Settings of the context the provider publishes.
    ///
    /// Must match the provider's own settings, otherwise the condition looks
    /// up a context that was never offered and sees it as absent.
    pub fn with_settings(mut self, settings: ContextSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn DecisionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn execute(
        &self,
        input: EvaluateConditionInput,
    ) -> Result<EvaluationOutcome, EvaluateConditionError> {
        let instance_id = input.instance_id;
        if instance_id.trim().is_empty() {
            return Err(EvaluateConditionError::EmptyInstanceId);
        }

        let config = match self.store.load(&instance_id) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(instance = %instance_id, "No stored configuration, using defaults");
                CategoryMatchCondition::default_configuration()
            }
            Err(source) => {
                return Err(EvaluateConditionError::LoadConfig {
                    instance_id,
                    source,
                });
            }
        };

        let mut condition = CategoryMatchCondition::new(self.catalog.clone())
            .with_settings(self.settings.clone())
            .with_configuration(config);
        let stale = condition.prune_stale().unwrap_or_else(|e| {
            warn!(instance = %instance_id, "Could not check for stale bundles: {}", e);
            Vec::new()
        });

        let context_name = condition.definition().context_name.clone();
        let contexts = self.provider.runtime_contexts(&[context_name.as_str()]);
        let matched = condition.execute(&contexts);

        let context = contexts.get(&context_name).cloned().unwrap_or_else(|| {
            ResolvedContext::absent(condition.definition().context.clone(), CacheMetadata::new())
        });
        let cacheability = context.cacheability().clone().merged(&condition.cacheability());

        self.logger.log(DecisionRecord {
            instance_id: instance_id.clone(),
            context: context_name,
            entity: context.entity().map(|e| e.id.clone()),
            bundle: context.bundle().cloned(),
            negate: condition.configuration().negate,
            matched,
        });
        info!(instance = %instance_id, "Condition evaluated to {}", matched);

        Ok(EvaluationOutcome {
            instance_id,
            summary: condition.summary(),
            config: condition.configuration().clone(),
            context,
            stale,
            matched,
            cacheability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context_provider::RouteEntityResolver;
    use crate::use_cases::test_support::{
        FixedRoute, MemoryCatalog, MemoryConfigStore, MemoryEntities, RecordingLogger,
    };
    use termgate_domain::{EntityId, TAXONOMY_TERM_CACHE_CONTEXT, TAXONOMY_TERM_LIST_TAG, UNCONFIGURED_SUMMARY};

    fn use_case(route: FixedRoute, store: Arc<MemoryConfigStore>) -> EvaluateConditionUseCase {
        let resolver = RouteEntityResolver::new(Arc::new(MemoryEntities::terms()), Arc::new(route));
        EvaluateConditionUseCase::new(Arc::new(resolver), Arc::new(MemoryCatalog::fruit_veg()), store)
    }

    fn stored(instance_id: &str, config: ConditionConfig) -> Arc<MemoryConfigStore> {
        let store = MemoryConfigStore::default();
        store.save(instance_id, &config).unwrap();
        Arc::new(store)
    }

    #[test]
    fn test_matching_term() {
        let store = stored("block", ConditionConfig::new().with_bundles(["1"]));
        let outcome = use_case(FixedRoute::term("10"), store)
            .execute(EvaluateConditionInput::new("block"))
            .unwrap();

        assert!(outcome.matched);
        assert_eq!(outcome.context.entity().unwrap().id, EntityId::new("10"));
        assert_eq!(outcome.summary, "Category is one of: Fruit");
        assert!(outcome.cacheability.has_context(TAXONOMY_TERM_CACHE_CONTEXT));
        assert!(outcome.cacheability.has_tag("taxonomy_term:10"));
        assert!(outcome.cacheability.has_tag(TAXONOMY_TERM_LIST_TAG));
    }

    #[test]
    fn test_non_matching_term() {
        let store = stored("block", ConditionConfig::new().with_bundles(["1"]));
        let outcome = use_case(FixedRoute::term("20"), store)
            .execute(EvaluateConditionInput::new("block"))
            .unwrap();
        assert!(!outcome.matched);
    }

    #[test]
    fn test_no_route_with_negate() {
        let store = stored("block", ConditionConfig::new().with_bundles(["1"]).with_negate(true));
        let outcome = use_case(FixedRoute(None), store)
            .execute(EvaluateConditionInput::new("block"))
            .unwrap();
        assert!(outcome.matched);
        assert!(!outcome.context.is_present());
        assert!(outcome.cacheability.has_context(TAXONOMY_TERM_CACHE_CONTEXT));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let outcome = use_case(FixedRoute::term("10"), Arc::new(MemoryConfigStore::default()))
            .execute(EvaluateConditionInput::new("unknown"))
            .unwrap();
        assert!(!outcome.matched);
        assert_eq!(outcome.summary, UNCONFIGURED_SUMMARY);
    }

    #[test]
    fn test_stale_bundles_are_pruned_on_read() {
        let store = stored("block", ConditionConfig::new().with_bundles(["gone"]).with_negate(true));
        let outcome = use_case(FixedRoute::term("10"), store)
            .execute(EvaluateConditionInput::new("block"))
            .unwrap();
        assert_eq!(outcome.stale, vec![CategoryId::new("gone")]);
        assert!(!outcome.config.is_configured());
        assert!(outcome.matched);
    }

    #[test]
    fn test_store_failure_is_error() {
        let store = Arc::new(MemoryConfigStore {
            fail: true,
            ..Default::default()
        });
        let err = use_case(FixedRoute::term("10"), store)
            .execute(EvaluateConditionInput::new("block"))
            .unwrap_err();
        assert!(matches!(err, EvaluateConditionError::LoadConfig { .. }));
    }

    #[test]
    fn test_decision_is_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let store = stored("block", ConditionConfig::new().with_bundles(["2"]));
        use_case(FixedRoute::term("20"), store)
            .with_logger(logger.clone())
            .execute(EvaluateConditionInput::new("block"))
            .unwrap();

        let records = logger.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instance_id, "block");
        assert_eq!(records[0].context, "taxonomy_term");
        assert_eq!(records[0].bundle, Some(CategoryId::new("2")));
        assert!(records[0].matched);
    }

    #[test]
    fn test_renamed_context_still_matches() {
        let settings = ContextSettings::default()
            .with_name("current_term")
            .with_cache_context("route.term");
        let resolver = RouteEntityResolver::new(
            Arc::new(MemoryEntities::terms()),
            Arc::new(FixedRoute::term("10")),
        )
        .with_settings(settings.clone());
        let logger = Arc::new(RecordingLogger::default());
        let store = stored("block", ConditionConfig::new().with_bundles(["1"]));

        let outcome = EvaluateConditionUseCase::new(
            Arc::new(resolver),
            Arc::new(MemoryCatalog::fruit_veg()),
            store,
        )
        .with_settings(settings)
        .with_logger(logger.clone())
        .execute(EvaluateConditionInput::new("block"))
        .unwrap();

        assert!(outcome.context.is_present());
        assert!(outcome.matched);
        assert!(outcome.cacheability.has_context("route.term"));
        assert!(!outcome.cacheability.has_context(TAXONOMY_TERM_CACHE_CONTEXT));
        assert_eq!(logger.0.lock().unwrap()[0].context, "current_term");
    }
}
