//! Integration tests for the daily neural-track state machine.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post};
use serde_json::json;
use sqlx::PgPool;

use neurowealth_db::models::user::{CreateUser, User};
use neurowealth_db::repositories::UserRepo;

async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            first_access_date: chrono::Utc::now(),
            is_debug: false,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generation_requires_todays_voice_session(pool: PgPool) {
    let user = seed_user(&pool, "early@example.com").await;
    let app = common::build_test_app(pool);

    let availability = get(app.clone(), &format!("/api/v1/users/{}/neural/availability", user.id)).await;
    let body = expect_json(availability, StatusCode::OK).await;
    assert_eq!(body["data"]["allowed"], false);
    assert_eq!(
        body["data"]["reason"],
        "Complete today's voice analysis session first"
    );

    let generate = post(app, &format!("/api/v1/users/{}/neural/generate", user.id)).await;
    let body = expect_json(generate, StatusCode::CONFLICT).await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "Complete today's voice analysis session first");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn state_machine_walks_generate_then_complete(pool: PgPool) {
    let user = seed_user(&pool, "walk@example.com").await;
    let app = common::build_test_app(pool);

    // Today's voice session unlocks generation.
    let session = post(app.clone(), &format!("/api/v1/users/{}/sessions", user.id)).await;
    assert_eq!(session.status(), StatusCode::CREATED);

    let availability = get(app.clone(), &format!("/api/v1/users/{}/neural/availability", user.id)).await;
    let body = expect_json(availability, StatusCode::OK).await;
    assert_eq!(body["data"]["allowed"], true);
    assert_eq!(body["data"]["reason"], json!(null));

    // Generate: allowed exactly once.
    let generate = post(app.clone(), &format!("/api/v1/users/{}/neural/generate", user.id)).await;
    let body = expect_json(generate, StatusCode::OK).await;
    assert_eq!(body["data"]["hasGeneratedGammaSession"], true);
    assert_eq!(body["data"]["gammaSessionCompleted"], false);

    let again = post(app.clone(), &format!("/api/v1/users/{}/neural/generate", user.id)).await;
    let body = expect_json(again, StatusCode::CONFLICT).await;
    assert_eq!(body["reason"], "Session generated - listen to complete it");

    // Complete: flips the second flag, then the day is exhausted.
    let complete = post(app.clone(), &format!("/api/v1/users/{}/neural/complete", user.id)).await;
    let body = expect_json(complete, StatusCode::OK).await;
    assert_eq!(body["data"]["gammaSessionCompleted"], true);

    let done = post(app.clone(), &format!("/api/v1/users/{}/neural/generate", user.id)).await;
    let body = expect_json(done, StatusCode::CONFLICT).await;
    assert_eq!(body["reason"], "Neural session completed for today");

    let availability = get(app, &format!("/api/v1/users/{}/neural/availability", user.id)).await;
    let body = expect_json(availability, StatusCode::OK).await;
    assert_eq!(body["data"]["allowed"], false);
    assert_eq!(body["data"]["reason"], "Neural session completed for today");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_without_generation_is_a_conflict_error(pool: PgPool) {
    let user = seed_user(&pool, "eager@example.com").await;
    let app = common::build_test_app(pool);

    let session = post(app.clone(), &format!("/api/v1/users/{}/sessions", user.id)).await;
    assert_eq!(session.status(), StatusCode::CREATED);

    let complete = post(app, &format!("/api/v1/users/{}/neural/complete", user.id)).await;
    let body = expect_json(complete, StatusCode::CONFLICT).await;
    // Client bug, so this is an error envelope rather than a decision body.
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_twice_is_a_conflict_error(pool: PgPool) {
    let user = seed_user(&pool, "twice@example.com").await;
    let app = common::build_test_app(pool);

    post(app.clone(), &format!("/api/v1/users/{}/sessions", user.id)).await;
    post(app.clone(), &format!("/api/v1/users/{}/neural/generate", user.id)).await;
    post(app.clone(), &format!("/api/v1/users/{}/neural/complete", user.id)).await;

    let repeat = post(app, &format!("/api/v1/users/{}/neural/complete", user.id)).await;
    let body = expect_json(repeat, StatusCode::CONFLICT).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn neural_endpoints_404_for_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(app, "/api/v1/users/555555/neural/generate").await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
}
