//! Integration tests for delegated access via access passes.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_user_reaches_own_resources() {
    let app = TestApp::new().await;
    let user_id = app.create_user("self-access@test.com").await;
    let token = app.token_for(user_id);

    let response = app
        .request("GET", &format!("/api/v1/users/{}", user_id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["email"].as_str(),
        Some("self-access@test.com")
    );
}

#[tokio::test]
async fn test_stranger_gets_404_not_403() {
    let app = TestApp::new().await;
    let owner = app.create_user("pass-owner@test.com").await;
    let stranger = app.create_user("pass-stranger@test.com").await;
    let token = app.token_for(stranger);

    // Denied and nonexistent must be indistinguishable.
    let response = app
        .request("GET", &format!("/api/v1/users/{}", owner), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "GET",
            &format!("/api/v1/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grant_opens_access_and_revoke_closes_it() {
    let app = TestApp::new().await;
    let admin = app.create_user("pass-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let subject = app.create_user("pass-subject@test.com").await;
    let actor = app.create_user("pass-actor@test.com").await;

    let admin_token = app.token_for(admin);
    let actor_token = app.token_for(actor);
    let tests_path = format!("/api/v1/users/{}/tests", subject);

    let response = app.request("GET", &tests_path, None, Some(&actor_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/access-passes", subject),
            Some(json!({ "actor_user_id": actor })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("GET", &tests_path, None, Some(&actor_token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!(
                "/api/v1/users/{}/access-passes?actor_user_id={}",
                subject, actor
            ),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["revoked"].as_u64().unwrap() >= 1);

    let response = app.request("GET", &tests_path, None, Some(&actor_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_granted_pass_names_the_body_actor_not_the_caller() {
    let app = TestApp::new().await;
    let admin = app.create_user("pass-grantor@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let subject = app.create_user("pass-grantor-subject@test.com").await;
    let actor = app.create_user("pass-grantor-actor@test.com").await;
    let admin_token = app.token_for(admin);

    // The caller delegates between two other users.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/access-passes", subject),
            Some(json!({ "actor_user_id": actor })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["actor_user_id"], json!(actor));
    assert_eq!(response.body["data"]["subject_user_id"], json!(subject));

    // The named actor gained access; the grantor did not.
    let subject_path = format!("/api/v1/users/{}", subject);
    let response = app
        .request("GET", &subject_path, None, Some(&app.token_for(actor)))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &subject_path, None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_regranting_a_pass_is_idempotent() {
    let app = TestApp::new().await;
    let admin = app.create_user("pass-regrant-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let subject = app.create_user("pass-regrant-subject@test.com").await;
    let actor = app.create_user("pass-regrant-actor@test.com").await;
    let token = app.token_for(admin);

    let path = format!("/api/v1/users/{}/access-passes", subject);
    let body = json!({ "actor_user_id": actor });

    let first = app.request("POST", &path, Some(body.clone()), Some(&token)).await;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = app.request("POST", &path, Some(body), Some(&token)).await;
    assert_eq!(second.status, StatusCode::CREATED);

    // Both answers name the same pass.
    assert_eq!(first.body["data"]["id"], second.body["data"]["id"]);
}

#[tokio::test]
async fn test_self_grant_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.create_user("pass-selfgrant@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/access-passes", admin),
            Some(json!({ "actor_user_id": admin })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_grant_requires_permission() {
    let app = TestApp::new().await;
    let plain = app.create_user("pass-noperm@test.com").await;
    app.assign_role(plain, "USER").await;
    let subject = app.create_user("pass-noperm-subject@test.com").await;
    let actor = app.create_user("pass-noperm-actor@test.com").await;
    let token = app.token_for(plain);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/access-passes", subject),
            Some(json!({ "actor_user_id": actor })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_grant_to_unknown_user_is_404() {
    let app = TestApp::new().await;
    let admin = app.create_user("pass-unknown-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/access-passes", uuid::Uuid::new_v4()),
            Some(json!({ "actor_user_id": admin })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
