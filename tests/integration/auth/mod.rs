//! Signup and signin integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{body_bytes, parse_body, TestApp};

#[tokio::test]
async fn test_signup_returns_identity_payload() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert!(body["id"].is_string());
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    // The password and its digest are never echoed back
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    assert_eq!(app.store.count("useraccount"), 1);
}

#[tokio::test]
async fn test_signup_stores_digest_and_defaults() {
    let app = TestApp::new();

    app.post_json(
        "/api/auth/signup",
        json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
    )
    .await;

    use museum_store::DocumentStore;
    let stored = app
        .store
        .find_one("useraccount", bson::doc! { "email": "a@x.com" })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.get_str("password_hash").unwrap(),
        museum_common::hash_password("pw1")
    );
    assert_eq!(stored.get_str("role").unwrap(), "user");
    assert!(stored.get_bool("is_active").unwrap());
}

#[tokio::test]
async fn test_signup_duplicate_email_is_400_and_inserts_nothing() {
    let app = TestApp::new();

    let first = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "B", "email": "a@x.com", "password": "pw2"}),
        )
        .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(second).await;
    assert_eq!(body["detail"], "Email already registered");

    assert_eq!(app.store.count("useraccount"), 1);
}

#[tokio::test]
async fn test_signup_malformed_email_is_400() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "not-an-email", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count("useraccount"), 0);
}

#[tokio::test]
async fn test_signup_then_signin_round_trip() {
    let app = TestApp::new();

    let signup = parse_body(
        app.post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await,
    )
    .await;

    let signin = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(signin.status(), StatusCode::OK);

    let signin = parse_body(signin).await;
    assert_eq!(signin["id"], signup["id"]);
    assert_eq!(signin["name"], "A");
    assert_eq!(signin["email"], "a@x.com");
}

#[tokio::test]
async fn test_signin_against_seeded_account() {
    let app = TestApp::new();
    let id = app.seed_account("Curator", "curator@x.com", "secret").await;

    let response = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "curator@x.com", "password": "secret"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["id"], id.to_hex());
}

#[tokio::test]
async fn test_signin_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.seed_account("A", "a@x.com", "pw1").await;

    let wrong_password = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "a@x.com", "password": "wrong"}),
        )
        .await;
    let unknown_email = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "nobody@x.com", "password": "pw1"}),
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: the caller cannot tell which check failed
    let wrong_password = body_bytes(wrong_password).await;
    let unknown_email = body_bytes(unknown_email).await;
    assert_eq!(wrong_password, unknown_email);

    let body: serde_json::Value = serde_json::from_slice(&wrong_password).unwrap();
    assert_eq!(body["detail"], "Invalid email or password");
}

#[tokio::test]
async fn test_auth_without_store_is_500() {
    let app = TestApp::without_store();

    let response = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = parse_body(response).await;
    assert_eq!(body["detail"], "Database not configured");

    let response = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// The concrete end-to-end scenario: register, repeat, then a bad signin.
#[tokio::test]
async fn test_signup_signin_scenario() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(parse_body(response).await["id"].is_string());

    let response = app
        .post_json(
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": "pw1"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await["detail"],
        "Email already registered"
    );

    let response = app
        .post_json(
            "/api/auth/signin",
            json!({"email": "a@x.com", "password": "wrong"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        parse_body(response).await["detail"],
        "Invalid email or password"
    );
}
