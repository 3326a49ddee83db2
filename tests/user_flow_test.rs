//! User flow integration tests
//!
//! End-to-end tests for signup, signin, and signout against the real
//! router and a PostgreSQL test database. These tests skip themselves
//! when `DATABASE_URL` is not set.

mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serial_test::serial;

use common::auth_helpers::{auth_header, create_test_user};
use common::database::TestDatabase;
use inkpost::backend::auth::users::find_user_by_username;
use inkpost::backend::auth::verify_token;
use inkpost::backend::routes::create_router;
use inkpost::backend::AppState;

fn test_server(db: &TestDatabase) -> TestServer {
    let app = create_router(AppState {
        db_pool: db.pool().clone(),
    });
    TestServer::new(app).expect("Failed to start test server")
}

#[tokio::test]
#[serial]
async fn signup_token_claim_matches_created_user() {
    if !common::database::configured() {
        eprintln!("skipping signup_token_claim_matches_created_user: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .post("/api/v1/user/signup")
        .json(&serde_json::json!({
            "username": "amara",
            "password": "password123",
            "name": "Amara Oduya"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.text();
    assert!(!token.is_empty());

    let claims = verify_token(&token).expect("signup must return a verifiable token");
    let user = find_user_by_username(db.pool(), "amara")
        .await
        .unwrap()
        .expect("user row must exist after signup");
    assert_eq!(claims.id, user.id);
}

#[tokio::test]
#[serial]
async fn signup_duplicate_username_is_rejected_as_invalid() {
    if !common::database::configured() {
        eprintln!("skipping signup_duplicate_username_is_rejected_as_invalid: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    create_test_user(db.pool(), "amara", "password123")
        .await
        .unwrap();

    let response = server
        .post("/api/v1/user/signup")
        .json(&serde_json::json!({
            "username": "amara",
            "password": "another-password",
            "name": "Someone Else"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid");
}

#[tokio::test]
#[serial]
async fn signup_does_not_store_plaintext_password() {
    if !common::database::configured() {
        eprintln!("skipping signup_does_not_store_plaintext_password: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    server
        .post("/api/v1/user/signup")
        .json(&serde_json::json!({
            "username": "amara",
            "password": "password123",
            "name": "Amara Oduya"
        }))
        .await;

    let user = find_user_by_username(db.pool(), "amara")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(user.password_hash, "password123");
    assert!(bcrypt::verify("password123", &user.password_hash).unwrap());
}

#[tokio::test]
#[serial]
async fn signin_returns_token_for_correct_credentials() {
    if !common::database::configured() {
        eprintln!("skipping signin_returns_token_for_correct_credentials: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let user = create_test_user(db.pool(), "amara", "password123")
        .await
        .unwrap();

    let response = server
        .post("/api/v1/user/signin")
        .json(&serde_json::json!({
            "username": "amara",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let claims = verify_token(&response.text()).expect("signin must return a verifiable token");
    assert_eq!(claims.id, user.id);
}

#[tokio::test]
#[serial]
async fn signin_with_wrong_password_is_forbidden() {
    if !common::database::configured() {
        eprintln!("skipping signin_with_wrong_password_is_forbidden: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    create_test_user(db.pool(), "amara", "password123")
        .await
        .unwrap();

    let response = server
        .post("/api/v1/user/signin")
        .json(&serde_json::json!({
            "username": "amara",
            "password": "wrongpassword"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Incorrect creds");
}

#[tokio::test]
#[serial]
async fn signin_with_unknown_username_is_forbidden() {
    if !common::database::configured() {
        eprintln!("skipping signin_with_unknown_username_is_forbidden: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .post("/api/v1/user/signin")
        .json(&serde_json::json!({
            "username": "nobody",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Incorrect creds");
}

#[tokio::test]
#[serial]
async fn signout_acknowledges_any_bearer_token() {
    if !common::database::configured() {
        eprintln!("skipping signout_acknowledges_any_bearer_token: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    // Sign-out never verifies the token, so an unverifiable one is
    // still acknowledged
    let response = server
        .post("/api/v1/user/signout")
        .add_header(AUTHORIZATION, auth_header("not-a-real-token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Successfully signed out");
}

#[tokio::test]
#[serial]
async fn signout_without_bearer_header_is_rejected() {
    if !common::database::configured() {
        eprintln!("skipping signout_without_bearer_header_is_rejected: DATABASE_URL not set");
        return;
    }
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server.post("/api/v1/user/signout").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
