//! Catalog API handlers
//!
//! Implements:
//! - GET /api/artifacts — search the catalog
//! - GET /api/artifacts/{id} — fetch a single artifact

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bson::oid::ObjectId;
use museum_common::{Error, Result};
use serde::Deserialize;

use crate::api::state::CatalogState;
use crate::domain::entities::ArtifactResponse;

/// Default number of artifacts returned by the listing.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for `GET /api/artifacts`.
#[derive(Debug, Deserialize)]
pub struct ListArtifactsQuery {
    /// Free-text search over title, description, and tags.
    pub q: Option<String>,
    /// Restrict to (non-)featured artifacts.
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}

/// GET /api/artifacts — search the catalog
pub async fn list_artifacts(
    State(state): State<CatalogState>,
    Query(query): Query<ListArtifactsQuery>,
) -> Result<Json<Vec<ArtifactResponse>>> {
    let repo = state.artifacts()?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let artifacts = repo
        .search(query.q.as_deref(), query.featured, limit)
        .await?;

    let responses: Vec<ArtifactResponse> = artifacts.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// GET /api/artifacts/{id} — fetch a single artifact
pub async fn get_artifact(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<ArtifactResponse>> {
    let repo = state.artifacts()?;

    // A malformed id is a client error, distinct from a well-formed id with
    // no matching document.
    let id = ObjectId::parse_str(&id)
        .map_err(|_| Error::Validation("Invalid artifact id".to_string()))?;

    let artifact = repo
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Artifact not found".to_string()))?;

    Ok(Json(artifact.into()))
}
