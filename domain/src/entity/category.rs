//! Categories and the option list offered to administrators

use crate::core::identifiers::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A category known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.into(),
        }
    }
}

/// Selectable categories, sorted by label then id.
///
/// The ordering is stable so the same catalog always renders the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryOptions {
    options: Vec<Category>,
}

impl CategoryOptions {
    pub fn from_catalog(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut seen = HashSet::new();
        let mut options: Vec<Category> = categories
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
        Self { options }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.options.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.options.iter().map(|c| &c.id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.options.iter().any(|c| &c.id == id)
    }

    pub fn label(&self, id: &CategoryId) -> Option<&str> {
        self.options
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl IntoIterator for CategoryOptions {
    type Item = Category;
    type IntoIter = std::vec::IntoIter<Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}
