//! Cacheability metadata attached to contexts and condition verdicts

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cache context varying output by the current taxonomy term
pub const TAXONOMY_TERM_CACHE_CONTEXT: &str = "taxonomy_term";

/// Invalidation tag for any change to the term list
pub const TAXONOMY_TERM_LIST_TAG: &str = "taxonomy_term_list";

/// How long a cached result stays valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxAge {
    #[default]
    Permanent,
    Seconds(u32),
}

impl MaxAge {
    /// The stricter of two ages
    pub fn min(self, other: MaxAge) -> MaxAge {
        match (self, other) {
            (MaxAge::Permanent, age) | (age, MaxAge::Permanent) => age,
            (MaxAge::Seconds(a), MaxAge::Seconds(b)) => MaxAge::Seconds(a.min(b)),
        }
    }
}

impl std::fmt::Display for MaxAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxAge::Permanent => write!(f, "permanent"),
            MaxAge::Seconds(s) => write!(f, "{}s", s),
        }
    }
}

/// Declares what a cached result varies by and what invalidates it.
///
/// Nothing here stores anything; callers with a cache layer read the
/// contexts and tags to build their keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    contexts: BTreeSet<String>,
    tags: BTreeSet<String>,
    max_age: MaxAge,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.add_context(context);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn with_max_age(mut self, max_age: MaxAge) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn add_context(&mut self, context: impl Into<String>) {
        self.contexts.insert(context.into());
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Union contexts and tags, keep the stricter max-age
    pub fn merge(&mut self, other: &CacheMetadata) {
        self.contexts.extend(other.contexts.iter().cloned());
        self.tags.extend(other.tags.iter().cloned());
        self.max_age = self.max_age.min(other.max_age);
    }

    pub fn merged(mut self, other: &CacheMetadata) -> Self {
        self.merge(other);
        self
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn max_age(&self) -> MaxAge {
        self.max_age
    }

    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.contains(context)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_age_min() {
        assert_eq!(MaxAge::Permanent.min(MaxAge::Seconds(10)), MaxAge::Seconds(10));
        assert_eq!(MaxAge::Seconds(5).min(MaxAge::Seconds(10)), MaxAge::Seconds(5));
        assert_eq!(MaxAge::Permanent.min(MaxAge::Permanent), MaxAge::Permanent);
    }

    #[test]
    fn test_merge_unions_and_keeps_stricter_age() {
        let a = CacheMetadata::new()
            .with_context(TAXONOMY_TERM_CACHE_CONTEXT)
            .with_tag("taxonomy_term:1");
        let b = CacheMetadata::new()
            .with_context("user.roles")
            .with_tag(TAXONOMY_TERM_LIST_TAG)
            .with_max_age(MaxAge::Seconds(60));

        let merged = a.merged(&b);
        assert_eq!(
            merged.contexts().collect::<Vec<_>>(),
            vec!["taxonomy_term", "user.roles"]
        );
        assert!(merged.has_tag("taxonomy_term:1"));
        assert!(merged.has_tag(TAXONOMY_TERM_LIST_TAG));
        assert_eq!(merged.max_age(), MaxAge::Seconds(60));
    }

    #[test]
    fn test_contexts_are_deduplicated() {
        let meta = CacheMetadata::new()
            .with_context("taxonomy_term")
            .with_context("taxonomy_term");
        assert_eq!(meta.contexts().count(), 1);
    }
}
