//! Entities and categories read from external stores.

pub mod category;
pub mod entities;
