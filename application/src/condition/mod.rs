//! Conditions
//!
//! A condition is a boolean predicate over a runtime context, configured by
//! an administrator. Any type implementing [`Condition`] can be evaluated by
//! the host without knowing its concrete kind.

mod category_match;

pub use category_match::{CATEGORY_CONDITION_ID, CategoryMatchCondition};

use crate::ports::entity_store::StoreError;
use termgate_domain::{
    CacheMetadata, CategoryId, CategoryOptions, ContextDefinition, ResolvedContext, RuntimeContexts,
};
use tracing::debug;

/// Static description of a condition kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionDefinition {
    /// Machine name (e.g. `taxonomy_term_type`)
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Name of the runtime context the condition reads
    pub context_name: String,
    /// What that context must hold
    pub context: ContextDefinition,
}

/// Capability shared by every condition kind
pub trait Condition: Send + Sync {
    fn definition(&self) -> &ConditionDefinition;

    /// Options an administrator can pick from
    fn build_configuration_options(&self) -> Result<CategoryOptions, StoreError>;

    /// Replace the selection, returning ids that were dropped as unknown
    fn set_configuration(&mut self, selected: &[CategoryId]) -> Result<Vec<CategoryId>, StoreError>;

    /// Verdict for one resolved context, negation included
    fn evaluate(&self, context: &ResolvedContext) -> bool;

    /// Human-readable description of the configuration
    fn summary(&self) -> String;

    /// Evaluate against the host's runtime contexts.
    ///
    /// A missing context, or one of the wrong data type, counts as absent.
    fn execute(&self, contexts: &RuntimeContexts) -> bool {
        let definition = self.definition();
        match contexts.get(&definition.context_name) {
            Some(context) if definition.context.accepts(context.definition()) => self.evaluate(context),
            Some(context) => {
                debug!(
                    condition = %definition.id,
                    "Context '{}' is {}, expected {}",
                    definition.context_name,
                    context.definition().data_type,
                    definition.context.data_type
                );
                self.evaluate(&ResolvedContext::absent(
                    definition.context.clone(),
                    context.cacheability().clone(),
                ))
            }
            None => {
                debug!(condition = %definition.id, "Context '{}' not provided", definition.context_name);
                self.evaluate(&ResolvedContext::absent(definition.context.clone(), CacheMetadata::new()))
            }
        }
    }
}
