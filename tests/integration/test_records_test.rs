//! Integration tests for diagnostic test records.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn antibody_schema() -> serde_json::Value {
    json!({
        "fields": {
            "c": "number",
            "igg": "string",
            "igm": "string"
        }
    })
}

#[tokio::test]
async fn test_create_and_read_back_a_record() {
    let app = TestApp::new().await;
    let user = app.create_user("rec-owner@test.com").await;
    let type_id = app
        .create_test_type("antibody-panel", antibody_schema(), None)
        .await;
    let token = app.token_for(user);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({
                "test_type_id": type_id,
                "results": { "details": { "c": 12, "igg": "positive", "igm": "negative" } }
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let test_id = response.body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(
        response.body["data"]["results"]["tester_user_id"].as_str(),
        Some(user.to_string().as_str())
    );

    let response = app
        .request("GET", &format!("/api/v1/tests/{}", test_id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["results"]["details"]["c"], json!(12));
}

#[tokio::test]
async fn test_record_without_results_is_fine() {
    let app = TestApp::new().await;
    let user = app.create_user("rec-noresults@test.com").await;
    let type_id = app
        .create_test_type("swab", json!({ "fields": {} }), None)
        .await;
    let token = app.token_for(user);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({ "test_type_id": type_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["data"]["results"].is_null());
}

#[tokio::test]
async fn test_unknown_test_type_is_unprocessable() {
    let app = TestApp::new().await;
    let user = app.create_user("rec-unknown-type@test.com").await;
    let token = app.token_for(user);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({ "test_type_id": uuid::Uuid::new_v4() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_results_are_unprocessable() {
    let app = TestApp::new().await;
    let user = app.create_user("rec-malformed@test.com").await;
    let type_id = app
        .create_test_type("antibody-strict", antibody_schema(), None)
        .await;
    let token = app.token_for(user);

    // Wrong type for `c`, array for `igm`.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({
                "test_type_id": type_id,
                "results": { "details": { "c": "twelve", "igg": "Wot", "igm": [] } }
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    // Unknown field.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({
                "test_type_id": type_id,
                "results": { "details": { "c": 1, "igg": "a", "igm": "b", "extra": true } }
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    // Missing field.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", user),
            Some(json!({
                "test_type_id": type_id,
                "results": { "details": { "c": 1 } }
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tests WHERE user_id = $1")
        .bind(user)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_result_entry_may_require_a_permission() {
    let app = TestApp::new().await;
    let patient = app.create_user("rec-patient@test.com").await;
    let doctor = app.create_user("rec-doctor@test.com").await;
    app.assign_role(doctor, "DOCTOR").await;
    let type_id = app
        .create_test_type(
            "restricted-panel",
            json!({ "fields": { "c": "number" } }),
            Some("ADD_RESULTS_PER_TEST_TYPE"),
        )
        .await;

    let admin = app.create_user("rec-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let admin_token = app.token_for(admin);
    app.request(
        "POST",
        &format!("/api/v1/users/{}/access-passes", patient),
        Some(json!({ "actor_user_id": doctor })),
        Some(&admin_token),
    )
    .await;

    let doctor_token = app.token_for(doctor);
    let body = json!({
        "test_type_id": type_id,
        "results": { "details": { "c": 3 } }
    });

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", patient),
            Some(body.clone()),
            Some(&doctor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.grant_permission_to_role("ADD_RESULTS_PER_TEST_TYPE", "DOCTOR")
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", patient),
            Some(body),
            Some(&doctor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["data"]["results"]["tester_user_id"].as_str(),
        Some(doctor.to_string().as_str())
    );
}

#[tokio::test]
async fn test_records_of_other_users_answer_404() {
    let app = TestApp::new().await;
    let owner = app.create_user("rec-404-owner@test.com").await;
    let stranger = app.create_user("rec-404-stranger@test.com").await;
    let type_id = app
        .create_test_type("plain", json!({ "fields": {} }), None)
        .await;
    let owner_token = app.token_for(owner);
    let stranger_token = app.token_for(stranger);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/tests", owner),
            Some(json!({ "test_type_id": type_id })),
            Some(&owner_token),
        )
        .await;
    let test_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/v1/tests/{}", test_id),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "GET",
            &format!("/api/v1/tests/{}", uuid::Uuid::new_v4()),
            None,
            Some(&stranger_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_type_catalog_is_readable_by_any_authenticated_user() {
    let app = TestApp::new().await;
    let user = app.create_user("rec-catalog@test.com").await;
    app.create_test_type("catalog-entry", json!({ "fields": {} }), None)
        .await;
    let token = app.token_for(user);

    let response = app
        .request("GET", "/api/v1/test-types", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t["name"] == "catalog-entry")
    );
}
