//! Route definitions for the accounts domain API

use axum::{routing::post, Router};

use super::handlers::auth;
use super::state::AccountsState;

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/signin", post(auth::signin))
}
