//! Catalog domain: the museum's searchable, read-only artifact collection

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ArtifactDocument, ArtifactResponse};

// Re-export repository types
pub use repository::ArtifactRepository;

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
