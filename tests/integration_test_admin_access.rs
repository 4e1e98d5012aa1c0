mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_bootstrap_admin_and_role_grants() {
    let app = TestApp::new().await;

    // Creating a gym bootstraps its first admin with a one-time secret.
    let create_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/gyms")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Boot Gym", "slug": "boot-gym"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(create_res.status(), StatusCode::OK);
    let created = parse_body(create_res).await;
    let gym_id = created["gym_id"].as_str().unwrap().to_string();
    assert_eq!(created["admin_username"], "admin");
    let secret = created["admin_secret"].as_str().unwrap().to_string();

    let admin_auth = app.login(&gym_id, "admin", &secret).await;

    // Admin grants a staff login.
    let staff_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/admins", gym_id))
            .header(header::COOKIE, format!("access_token={}", admin_auth.access_token))
            .header("X-CSRF-Token", &admin_auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "username": "frontdesk",
                "password": "hunter2hunter2"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(staff_res.status(), StatusCode::OK);
    let staff = parse_body(staff_res).await;
    assert_eq!(staff["role"], "staff");

    // Staff members cannot grant access themselves.
    let staff_auth = app.login(&gym_id, "frontdesk", "hunter2hunter2").await;
    let denied_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/admins", gym_id))
            .header(header::COOKIE, format!("access_token={}", staff_auth.access_token))
            .header("X-CSRF-Token", &staff_auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "username": "rogue",
                "password": "letmeinletmein",
                "role": "admin"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(denied_res.status(), StatusCode::FORBIDDEN);

    // A second full admin can be granted by the first.
    let second_admin_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/admins", gym_id))
            .header(header::COOKIE, format!("access_token={}", admin_auth.access_token))
            .header("X-CSRF-Token", &admin_auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "username": "co-owner",
                "password": "s3cure-pass-123",
                "role": "admin"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(second_admin_res.status(), StatusCode::OK);
    assert_eq!(parse_body(second_admin_res).await["role"], "admin");

    // Duplicate usernames are refused.
    let dup_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/admins", gym_id))
            .header(header::COOKIE, format!("access_token={}", admin_auth.access_token))
            .header("X-CSRF-Token", &admin_auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "username": "frontdesk",
                "password": "whatever123"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(dup_res.status(), StatusCode::CONFLICT);

    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/admins", gym_id))
            .header(header::COOKIE, format!("access_token={}", admin_auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(list_res).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_csrf_is_enforced_on_writes() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("CSRF Gym", "csrf-gym").await;

    // Write with the cookie but no CSRF header is refused.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/members", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Sneaky",
                "phone": "123",
                "email": "sneaky@example.com",
                "plan": "3-month-basic",
                "start_date": "2025-01-01"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Reads only need the cookie.
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rotation_and_logout() {
    let app = TestApp::new().await;

    let create_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/gyms")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Token Gym", "slug": "token-gym"}).to_string())).unwrap()
    ).await.unwrap();
    let created = parse_body(create_res).await;
    let gym_id = created["gym_id"].as_str().unwrap().to_string();
    let secret = created["admin_secret"].as_str().unwrap().to_string();

    // Raw login to capture both cookies.
    let login_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "gym_id": gym_id,
                "username": "admin",
                "password": secret
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(login_res.status(), StatusCode::OK);

    let cookies: Vec<String> = login_res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|h| h.to_str().unwrap().to_string())
        .collect();
    let refresh_cookie = cookies.iter()
        .find(|c| c.starts_with("refresh_token="))
        .expect("No refresh_token cookie")
        .split(';').next().unwrap().to_string();

    // Refresh rotates the pair.
    let refresh_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, &refresh_cookie)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(refresh_res.status(), StatusCode::OK);
    let refreshed = parse_body(refresh_res).await;
    assert!(refreshed["csrf_token"].as_str().is_some());

    // The old refresh token was consumed by the rotation.
    let reuse_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, &refresh_cookie)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(reuse_res.status(), StatusCode::UNAUTHORIZED);

    // Logout always succeeds and clears the cookies.
    let logout_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/logout")
            .header(header::COOKIE, &refresh_cookie)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(logout_res.status(), StatusCode::OK);
}
