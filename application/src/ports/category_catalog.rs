//! Category catalog port

use super::entity_store::StoreError;
use termgate_domain::{Category, CategoryOptions};

/// Read-only listing of every known category
pub trait CategoryCatalog: Send + Sync {
    /// All categories in catalog order
    fn list_all(&self) -> Result<Vec<Category>, StoreError>;

    /// All categories as a label-sorted option list
    fn options(&self) -> Result<CategoryOptions, StoreError> {
        Ok(CategoryOptions::from_catalog(self.list_all()?))
    }
}
