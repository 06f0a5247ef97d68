//! Context providers
//!
//! A context provider turns request state into named runtime contexts that
//! other components (conditions, blocks) consume without knowing where the
//! value came from.

mod route_entity_resolver;

pub use route_entity_resolver::RouteEntityResolver;

use termgate_domain::RuntimeContexts;

/// Capability of offering runtime contexts
pub trait ContextProvider: Send + Sync {
    /// Contexts for the current request.
    ///
    /// `unqualified_ids` narrows the result to the named contexts; an empty
    /// slice returns every context the provider offers.
    fn runtime_contexts(&self, unqualified_ids: &[&str]) -> RuntimeContexts;

    /// Contexts this provider can offer, without consulting any request.
    ///
    /// Used for introspection (e.g. listing what a condition could bind to).
    /// Values are always absent.
    fn available_contexts(&self) -> RuntimeContexts;
}
