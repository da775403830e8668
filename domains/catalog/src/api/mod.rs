//! API layer for the catalog domain
//!
//! Contains HTTP handlers, routes, and the domain state definition.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::CatalogState;
