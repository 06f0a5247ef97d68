//! The route of the request being handled

use super::table::RouteTable;
use termgate_application::RouteMatchPort;
use termgate_domain::RouteContext;

/// Route match port for a single request.
///
/// Holds the matched route (or nothing, when the path matched no route or
/// there is no request at all).
#[derive(Debug, Clone, Default)]
pub struct CurrentRoute {
    route: Option<RouteContext>,
}

impl CurrentRoute {
    pub fn new(route: Option<RouteContext>) -> Self {
        Self { route }
    }

    /// Match `path` against `table`
    pub fn from_path(table: &RouteTable, path: &str) -> Self {
        Self::new(table.match_path(path))
    }

    pub fn route(&self) -> Option<&RouteContext> {
        self.route.as_ref()
    }
}

impl RouteMatchPort for CurrentRoute {
    fn current_route(&self) -> Option<RouteContext> {
        self.route.clone()
    }
}
