//! Domain entities for the catalog domain
//!
//! Stored artifact documents are untyped: apart from the id, every field is
//! optional at this layer, and a field absent in storage surfaces as null in
//! the public shape. Artifacts are created out-of-band; this service only
//! reads them.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a catalog artifact (collection `artifact`).
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Historical period or year.
    pub period: Option<String>,
    /// Free-text grouping label, not the storage collection name.
    pub collection: Option<String>,
    /// Search tokens matched alongside title and description.
    pub tags: Option<Vec<String>>,
    /// Homepage inclusion flag; filtered on, never returned.
    #[serde(default)]
    pub featured: bool,
}

/// Public response shape for catalog endpoints.
#[derive(Debug, Serialize)]
pub struct ArtifactResponse {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub period: Option<String>,
    pub collection: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<ArtifactDocument> for ArtifactResponse {
    fn from(artifact: ArtifactDocument) -> Self {
        Self {
            id: artifact.id.to_hex(),
            title: artifact.title,
            description: artifact.description,
            image_url: artifact.image_url,
            period: artifact.period,
            collection: artifact.collection,
            tags: artifact.tags,
        }
    }
}
