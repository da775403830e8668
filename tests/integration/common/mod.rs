//! Common test utilities and fixtures for integration tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bson::{doc, oid::ObjectId, Document};
use serde_json::Value;
use tower::ServiceExt;

use museum_api::create_app_with_store;
use museum_store::{DocumentStore, MockStore};

/// Test application over an in-memory store.
pub struct TestApp {
    pub store: Arc<MockStore>,
    router: Router,
}

impl TestApp {
    /// Router composed over a fresh, empty mock store.
    pub fn new() -> Self {
        let store = Arc::new(MockStore::new());
        let router = create_app_with_store(Some(store.clone()));
        Self { store, router }
    }

    /// Router composed with no store at all, as when DATABASE_URL is unset.
    pub fn without_store() -> Self {
        Self {
            store: Arc::new(MockStore::new()),
            router: create_app_with_store(None),
        }
    }

    /// Seed one artifact document and return its id.
    pub async fn seed_artifact(&self, document: Document) -> ObjectId {
        self.store
            .insert_one("artifact", document)
            .await
            .expect("seed artifact")
    }

    /// Seed an account the way signup would store it.
    pub async fn seed_account(&self, name: &str, email: &str, password: &str) -> ObjectId {
        self.store
            .insert_one(
                "useraccount",
                doc! {
                    "name": name,
                    "email": email,
                    "password_hash": museum_common::hash_password(password),
                    "role": "user",
                    "is_active": true,
                },
            )
            .await
            .expect("seed account")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Parse a response body as JSON.
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
