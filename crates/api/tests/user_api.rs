//! Integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, request};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn register_returns_created_user_without_secrets(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = request(
        &app,
        "POST",
        "/users",
        Some(json!({ "email": "builder@example.com", "password": "hunter22" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["email"], "builder@example.com");

    // Credential material must never appear in responses.
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert!(json.get("salt").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_email_returns_conflict_and_keeps_first_record(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "email": "builder@example.com", "password": "hunter22" });
    let response = request(&app, "POST", "/users", Some(body.clone()), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;

    // Second registration with the same email must conflict.
    let response = request(&app, "POST", "/users", Some(body), None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    // The first user's record is unaffected.
    let response = get(&app, &format!("/users/{}", first["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "builder@example.com");
}

#[sqlx::test(migrations = "../../migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = request(
        &app,
        "POST",
        "/users",
        Some(json!({ "email": "builder@example.com", "password": "five5" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("at least 6 characters"),
        "error message should state the minimum length"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn missing_password_field_is_rejected_with_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    // A body without `password` fails in the extractor, not the field
    // validators; it must still surface as 400 with a message body.
    let response = request(
        &app,
        "POST",
        "/users",
        Some(json!({ "email": "builder@example.com" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(
        json["message"].as_str().unwrap().contains("password"),
        "error message should name the missing field"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_insert_race_maps_to_same_conflict_response(pool: PgPool) {
    use axum::response::IntoResponse;
    use cpms_api::error::AppError;
    use cpms_db::models::user::CreateUser;
    use cpms_db::repositories::UserRepo;

    // Two inserts for the same email, straight through the repository, as
    // if both requests had passed the existence pre-check concurrently.
    let input = CreateUser {
        email: "builder@example.com".to_string(),
        password_hash: "hash".to_string(),
        salt: "aaaaa".to_string(),
    };
    UserRepo::create(&pool, &input).await.unwrap();
    let err = UserRepo::create(&pool, &input).await.unwrap_err();

    let response = AppError::Database(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = common::body_json(response).await;
    assert_eq!(json["message"], "A user with this email already exists");
}

#[sqlx::test(migrations = "../../migrations")]
async fn invalid_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = request(
        &app,
        "POST",
        "/users",
        Some(json!({ "email": "not-an-email", "password": "hunter22" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn listing_users_exposes_no_secret_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    for email in ["a@example.com", "b@example.com"] {
        let response = request(
            &app,
            "POST",
            "/users",
            Some(json!({ "email": email, "password": "hunter22" })),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json.as_array().expect("list response must be an array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user["email"].is_string());
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("password_hash").is_none());
        assert!(user.get("salt").is_none());
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_missing_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/users/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Not-found responses carry an empty body.
    assert!(common::body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_user_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = request(
        &app,
        "POST",
        "/users",
        Some(json!({ "email": "builder@example.com", "password": "hunter22" })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = request(&app, "DELETE", &format!("/users/{id}"), None, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = request(&app, "DELETE", &format!("/users/{id}"), None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
