//! HTTP composition root for the museum backend
//!
//! Composes the domain routers with the infrastructure routes and owns the
//! process-wide document store handle.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::{info, warn};

use museum_accounts::AccountsState;
use museum_catalog::CatalogState;
use museum_common::Config;
use museum_store::{MongoStore, SharedStore};

use crate::state::AppState;

/// Create the main application router with all routes
pub async fn create_app(config: &Config) -> Router {
    create_app_with_store(connect_store(config).await)
}

/// Compose the router over an already-built store handle.
///
/// Split out so tests can drive the full router against a mock store.
pub fn create_app_with_store(store: Option<SharedStore>) -> Router {
    let catalog_state = CatalogState::new(store.clone());
    let accounts_state = AccountsState::new(store.clone());
    let app_state = AppState { store };

    Router::new()
        .route("/", get(handlers::info::root))
        .route("/api/about", get(handlers::info::about))
        .route("/api/visit", get(handlers::info::visit))
        .route("/test", get(handlers::diagnostics::diagnostics))
        .merge(museum_catalog::routes().with_state(catalog_state))
        .merge(museum_accounts::routes().with_state(accounts_state))
        .with_state(app_state)
}

/// Build the document store from configuration.
///
/// Returns `None` when the database is not configured (or the connection
/// string is unusable); the server still starts, and storage-backed routes
/// answer with the configuration error.
async fn connect_store(config: &Config) -> Option<SharedStore> {
    let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
        warn!("DATABASE_URL or DATABASE_NAME not set; starting without a document store");
        return None;
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => {
            info!(database = %store.database_name(), "Document store configured");
            Some(Arc::new(store) as SharedStore)
        }
        Err(e) => {
            warn!(error = %e, "Failed to configure document store; starting without one");
            None
        }
    }
}
