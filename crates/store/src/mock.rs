//! In-memory document store for tests
//!
//! Holds collections in a `Mutex`-guarded map and evaluates the same filter
//! vocabulary the repositories send to MongoDB, so the unit and integration
//! suites can drive the full request path without a running database.

use std::collections::HashMap;
use std::sync::Mutex;

use bson::oid::ObjectId;
use bson::{Bson, Document};

use crate::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MockStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .expect("mock store lock poisoned")
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MockStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, StoreError> {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };
        self.collections
            .lock()
            .expect("mock store lock poisoned")
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .lock()
            .expect("mock store lock poisoned")
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)).cloned()))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        Ok(self
            .collections
            .lock()
            .expect("mock store lock poisoned")
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .collections
            .lock()
            .expect("mock store lock poisoned")
            .keys()
            .cloned()
            .collect())
    }
}

/// Evaluate a filter against a document.
///
/// Supports the vocabulary documented on `DocumentStore`: field equality,
/// `$regex`/`$options` conditions, and top-level `$or`, with AND semantics
/// across the filter's keys. An empty filter matches everything.
fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, condition)| match condition {
        Bson::Array(branches) if key == "$or" => branches.iter().any(|branch| {
            branch
                .as_document()
                .is_some_and(|branch| matches(document, branch))
        }),
        Bson::Document(condition) if condition.contains_key("$regex") => {
            regex_matches(document.get(key), condition)
        }
        expected => document.get(key) == Some(expected),
    })
}

fn regex_matches(value: Option<&Bson>, condition: &Document) -> bool {
    let Ok(pattern) = condition.get_str("$regex") else {
        return false;
    };
    let case_insensitive = condition
        .get_str("$options")
        .map(|options| options.contains('i'))
        .unwrap_or(false);
    let Ok(regex) = regex::RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
    else {
        return false;
    };
    match value {
        Some(Bson::String(text)) => regex.is_match(text),
        // An array field matches when any element matches.
        Some(Bson::Array(items)) => items
            .iter()
            .any(|item| item.as_str().is_some_and(|text| regex.is_match(text))),
        _ => false,
    }
}
