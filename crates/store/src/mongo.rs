//! MongoDB-backed document store

use bson::oid::ObjectId;
use bson::Document;
use futures::TryStreamExt;
use mongodb::{Client, Database};

use crate::{DocumentStore, StoreError};

/// Document store backed by a MongoDB database.
///
/// One client is created at startup and shared read-only by all handlers for
/// the process lifetime; connection pooling happens inside the driver.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect using a connection string and database name.
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        Ok(Self {
            db: client.database(database_name),
        })
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::InvalidDocument("inserted _id is not an ObjectId".to_string())
        })
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .find_one(filter)
            .await?)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        // limit 0 means "no limit" to the driver; here it must mean no
        // documents.
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }
}
