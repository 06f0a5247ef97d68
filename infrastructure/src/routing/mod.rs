//! Route matching adapter.
//!
//! [`RouteTable`] matches request paths against declared routes using
//! `matchit` and produces the [`RouteContext`](termgate_domain::RouteContext)
//! the context provider reads. [`CurrentRoute`] exposes one matched request
//! through the [`RouteMatchPort`](termgate_application::RouteMatchPort).

mod current;
mod table;

pub use current::CurrentRoute;
pub use table::{RouteDefinition, RouteTable, RouteTableError};
