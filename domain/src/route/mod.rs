//! Route matching results as seen by context providers.
//!
//! - [`route_context::RouteContext`]: matched route with raw parameters
//! - [`declaration::ParameterDeclaration`]: route option typing a parameter

pub mod declaration;
pub mod route_context;
