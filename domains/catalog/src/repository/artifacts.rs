//! Artifact repository

use bson::oid::ObjectId;
use bson::{doc, Document};
use museum_common::Result;
use museum_store::{SharedStore, StoreError};

use crate::domain::entities::ArtifactDocument;

/// Collection holding catalog artifacts.
const COLLECTION: &str = "artifact";

#[derive(Clone)]
pub struct ArtifactRepository {
    store: SharedStore,
}

impl ArtifactRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Find an artifact by id.
    pub async fn find(&self, id: ObjectId) -> Result<Option<ArtifactDocument>> {
        let document = self.store.find_one(COLLECTION, doc! { "_id": id }).await?;
        document.map(decode).transpose()
    }

    /// Search the catalog.
    ///
    /// `q` matches title, description, or any tag as a case-insensitive
    /// substring; `featured` narrows by equality on top of that. Results come
    /// back in storage-native order, at most `limit` of them.
    pub async fn search(
        &self,
        q: Option<&str>,
        featured: Option<bool>,
        limit: i64,
    ) -> Result<Vec<ArtifactDocument>> {
        let filter = search_filter(q, featured);
        let documents = self.store.find_many(COLLECTION, filter, limit).await?;
        documents.into_iter().map(decode).collect()
    }
}

fn decode(document: Document) -> Result<ArtifactDocument> {
    bson::from_document(document)
        .map_err(|e| StoreError::InvalidDocument(e.to_string()).into())
}

/// Build the search filter for the catalog listing.
fn search_filter(q: Option<&str>, featured: Option<bool>) -> Document {
    let mut filter = Document::new();
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        // Escaping turns the query into a literal substring test.
        let pattern = regex::escape(q);
        filter.insert(
            "$or",
            vec![
                contains("title", &pattern),
                contains("description", &pattern),
                contains("tags", &pattern),
            ],
        );
    }
    if let Some(featured) = featured {
        filter.insert("featured", featured);
    }
    filter
}

fn contains(field: &str, pattern: &str) -> Document {
    let mut condition = Document::new();
    condition.insert(field, doc! { "$regex": pattern, "$options": "i" });
    condition
}
