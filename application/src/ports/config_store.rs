//! Condition configuration persistence port

use super::entity_store::StoreError;
use termgate_domain::ConditionConfig;

/// Stores condition configuration keyed by condition instance id.
///
/// Writes for one instance are assumed to come from a single administrative
/// save at a time; adapters do not need to merge concurrent writers.
pub trait ConditionConfigStore: Send + Sync {
    fn load(&self, instance_id: &str) -> Result<Option<ConditionConfig>, StoreError>;

    fn save(&self, instance_id: &str, config: &ConditionConfig) -> Result<(), StoreError>;
}
