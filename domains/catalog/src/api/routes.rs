//! Route definitions for the catalog domain API

use axum::{routing::get, Router};

use super::handlers::artifacts;
use super::state::CatalogState;

/// Create all catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new()
        .route("/api/artifacts", get(artifacts::list_artifacts))
        .route("/api/artifacts/{id}", get(artifacts::get_artifact))
}
