//! Document store access for the museum backend
//!
//! The backing database holds plain documents addressed by collection name
//! and BSON filter. `DocumentStore` is the seam every handler depends on:
//! - `MongoStore` backs the running service,
//! - `MockStore` backs the unit and integration test suites.
//!
//! Handlers receive the store by injection (an `Arc<dyn DocumentStore>`
//! cloned into each domain's state) rather than through any process-global.

use bson::oid::ObjectId;
use bson::Document;

pub mod mock;
pub mod mongo;

pub use mock::MockStore;
pub use mongo::MongoStore;

/// Shared handle to a document store, cloned into every domain state.
pub type SharedStore = std::sync::Arc<dyn DocumentStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Operations the backend needs from its document database.
///
/// Filters are BSON documents. Implementations must honor the vocabulary the
/// repositories emit: field equality, `{"$regex": .., "$options": "i"}`
/// conditions (matching any element when the field holds an array of
/// strings), and top-level `$or` combined with AND semantics across the
/// remaining keys.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return the id the store assigned to it.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError>;

    /// Fetch the first document matching the filter, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Fetch at most `limit` documents matching the filter, in storage-native
    /// order. The order is whatever the store returns and must not be assumed
    /// stable across calls. `limit <= 0` yields no documents.
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Names of the collections currently present in the database.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
