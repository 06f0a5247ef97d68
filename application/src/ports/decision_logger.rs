//! Port for structured condition decision logging.
//!
//! Defines the [`DecisionLogger`] trait for recording every condition verdict
//! to a machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures what was decided and
//! why.

use serde::Serialize;
use termgate_domain::{CategoryId, EntityId};

/// One evaluated condition
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRecord {
    /// Condition instance id
    pub instance_id: String,
    /// Name of the context the condition read
    pub context: String,
    /// Entity the context resolved to
    pub entity: Option<EntityId>,
    /// Bundle of that entity
    pub bundle: Option<CategoryId>,
    pub negate: bool,
    pub matched: bool,
}

/// Port for logging condition decisions.
///
/// The `log` method is synchronous and non-fallible; logging failures must
/// not change a verdict.
pub trait DecisionLogger: Send + Sync {
    fn log(&self, record: DecisionRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDecisionLog;

impl DecisionLogger for NoDecisionLog {
    fn log(&self, _record: DecisionRecord) {}
}
