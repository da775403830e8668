//! Account repository

use bson::doc;
use bson::oid::ObjectId;
use museum_common::Result;
use museum_store::{SharedStore, StoreError};

use crate::domain::entities::UserAccount;

/// Collection holding registered accounts.
const COLLECTION: &str = "useraccount";

#[derive(Clone)]
pub struct AccountRepository {
    store: SharedStore,
}

impl AccountRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Find an account by exact email match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        let document = self
            .store
            .find_one(COLLECTION, doc! { "email": email })
            .await?;
        document
            .map(|document| {
                bson::from_document(document)
                    .map_err(|e| StoreError::InvalidDocument(e.to_string()).into())
            })
            .transpose()
    }

    /// Insert a new account and return the id the store assigned.
    pub async fn create(&self, account: &UserAccount) -> Result<ObjectId> {
        let document = bson::to_document(account)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
        Ok(self.store.insert_one(COLLECTION, document).await?)
    }
}
