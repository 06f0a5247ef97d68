//! Route match port
//!
//! Supplies the matched route of the current request, if there is one.

use termgate_domain::RouteContext;

/// Port giving access to the current request's route
pub trait RouteMatchPort: Send + Sync {
    /// `None` outside of a request (e.g. during introspection)
    fn current_route(&self) -> Option<RouteContext>;
}

/// Route port for callers with no active request
pub struct NoRoute;

impl RouteMatchPort for NoRoute {
    fn current_route(&self) -> Option<RouteContext> {
        None
    }
}
