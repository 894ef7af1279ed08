//! Integration tests for the permission and role catalog.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_catalog_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/permissions", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_listing_permissions_requires_permission() {
    let app = TestApp::new().await;
    let plain = app.create_user("perm-plain@test.com").await;
    app.assign_role(plain, "USER").await;
    let token = app.token_for(plain);

    let response = app
        .request("GET", "/api/v1/permissions", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_builtin_permissions() {
    let app = TestApp::new().await;
    let admin = app.create_user("perm-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request("GET", "/api/v1/permissions", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"BULK_CREATE_USERS"));
    assert!(names.contains(&"GRANT_ACCESS_PASS"));
}

#[tokio::test]
async fn test_create_permission_and_reject_duplicate() {
    let app = TestApp::new().await;
    let admin = app.create_user("perm-create-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request(
            "POST",
            "/api/v1/permissions",
            Some(json!({ "name": "EXPORT_REPORTS" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["data"]["created_by"].as_str(),
        Some(admin.to_string().as_str())
    );

    let response = app
        .request(
            "POST",
            "/api/v1/permissions",
            Some(json!({ "name": "EXPORT_REPORTS" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permissions WHERE name = $1")
        .bind("EXPORT_REPORTS")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_empty_permission_name_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.create_user("perm-empty-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request(
            "POST",
            "/api/v1/permissions",
            Some(json!({ "name": "   " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_assigning_unknown_permission_or_role_is_404() {
    let app = TestApp::new().await;
    let admin = app.create_user("perm-assign-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let token = app.token_for(admin);

    let response = app
        .request(
            "POST",
            "/api/v1/roles/DOCTOR/permissions",
            Some(json!({ "name": "NO_SUCH_PERMISSION" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/api/v1/roles/NO_SUCH_ROLE/permissions",
            Some(json!({ "name": "LIST_ROLES" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_grant_is_visible_on_the_next_request() {
    let app = TestApp::new().await;
    let admin = app.create_user("perm-live-admin@test.com").await;
    app.assign_role(admin, "ADMIN").await;
    let member = app.create_user("perm-live-member@test.com").await;
    let admin_token = app.token_for(admin);
    let member_token = app.token_for(member);

    let response = app
        .request("GET", "/api/v1/roles", None, Some(&member_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/v1/roles",
            Some(json!({ "name": "AUDITOR" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "POST",
            "/api/v1/roles/AUDITOR/permissions",
            Some(json!({ "name": "LIST_ROLES" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.body["data"]["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "LIST_ROLES")
    );

    let response = app
        .request(
            "POST",
            &format!("/api/v1/users/{}/roles", member),
            Some(json!({ "name": "AUDITOR" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // No caching: the same token now passes the gate.
    let response = app
        .request("GET", "/api/v1/roles", None, Some(&member_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
