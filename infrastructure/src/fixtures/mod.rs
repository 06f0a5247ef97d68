//! Fixture-backed entity store and category catalog.
//!
//! A fixture file describes a small site in TOML:
//!
//! ```toml
//! [[categories]]
//! id = "1"
//! label = "Fruit"
//!
//! [[entities]]
//! id = "10"
//! type = "taxonomy_term"
//! label = "Apple"
//! bundle = "1"
//!
//! [[routes]]
//! name = "entity.taxonomy_term.canonical"
//! path = "/taxonomy/term/{taxonomy_term}"
//! parameters = { taxonomy_term = "entity:taxonomy_term" }
//! ```

mod data;
mod memory;

pub use data::{FixtureData, FixtureError};
pub use memory::{InMemoryEntityStore, StaticCategoryCatalog};
