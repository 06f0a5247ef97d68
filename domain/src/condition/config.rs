//! Persisted condition configuration

use crate::core::identifiers::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration of a bundle condition (Value Object)
///
/// `bundles` is the administrator's selection; `negate` flips the final
/// verdict, never the membership test itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionConfig {
    pub bundles: BTreeSet<CategoryId>,
    pub negate: bool,
}

impl ConditionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundles<I, S>(mut self, bundles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryId>,
    {
        self.bundles = bundles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Whether at least one bundle is selected
    pub fn is_configured(&self) -> bool {
        !self.bundles.is_empty()
    }

    pub fn contains(&self, bundle: &CategoryId) -> bool {
        self.bundles.contains(bundle)
    }

    /// Verdict for an entity of `bundle` (`None` when there is no entity).
    ///
    /// Absence is never a member, and an empty selection matches nothing,
    /// so both cases come out as `negate`.
    pub fn verdict(&self, bundle: Option<&CategoryId>) -> bool {
        let member = bundle.is_some_and(|b| self.bundles.contains(b));
        member != self.negate
    }

    /// Drop bundles rejected by `is_known`, returning what was dropped
    pub fn retain_known(&mut self, is_known: impl Fn(&CategoryId) -> bool) -> Vec<CategoryId> {
        let (kept, dropped): (BTreeSet<_>, BTreeSet<_>) =
            std::mem::take(&mut self.bundles).into_iter().partition(|b| is_known(b));
        self.bundles = kept;
        dropped.into_iter().collect()
    }
}
