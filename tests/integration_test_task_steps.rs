mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_member(app: &TestApp, gym_id: &str, auth: &AuthHeaders) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/members", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Walker",
                "phone": "+91-9876500020",
                "email": "walker@example.com",
                "plan": "6-month-standard",
                "start_date": "2025-06-01"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn assign_task(app: &TestApp, gym_id: &str, auth: &AuthHeaders, member_id: &str, step_count: i64) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/members/{}/tasks", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "step_count": step_count,
                "notes": "missed session make-up"
            }).to_string())).unwrap()
    ).await.unwrap()
}

async fn get_summary(app: &TestApp, gym_id: &str, auth: &AuthHeaders, member_id: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members/{}/tasks/summary", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_task_step_lifecycle() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Steps Gym", "steps-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    // 1. Assign two tasks.
    let res = assign_task(&app, &gym_id, &auth, &member_id, 5000).await;
    assert_eq!(res.status(), StatusCode::OK);
    let first = parse_body(res).await;
    let first_id = first["id"].as_str().unwrap().to_string();
    assert_eq!(first["status"], "pending");
    assert!(first["completed_at"].is_null());

    let res = assign_task(&app, &gym_id, &auth, &member_id, 2500).await;
    let second_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["count"], 2);
    assert_eq!(summary["total_steps"], 7500);

    // 2. Completing stamps completed_at and drops it from the summary.
    let complete_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/tasks/{}/complete", gym_id, first_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(complete_res.status(), StatusCode::OK);
    let completed = parse_body(complete_res).await;
    assert_eq!(completed["status"], "completed");
    assert!(!completed["completed_at"].is_null());

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["count"], 1);
    assert_eq!(summary["total_steps"], 2500);

    // 3. Completion is one-way; a second attempt is an error, not a no-op.
    let complete_again = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/tasks/{}/complete", gym_id, first_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(complete_again.status(), StatusCode::CONFLICT);

    // 4. Deletion is the only way to remove a mistaken assignment.
    let del_res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/{}/tasks/{}", gym_id, second_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(del_res.status(), StatusCode::OK);

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["count"], 0);
    assert_eq!(summary["total_steps"], 0);
}

#[tokio::test]
async fn test_non_positive_step_count_creates_no_row() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Zero Gym", "zero-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    let res = assign_task(&app, &gym_id, &auth, &member_id, 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = assign_task(&app, &gym_id, &auth, &member_id, -100).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members/{}/tasks", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(list_res).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_pending_filter_and_missing_task() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Filter Gym", "filter-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    let res = assign_task(&app, &gym_id, &auth, &member_id, 1000).await;
    let task_id = parse_body(res).await["id"].as_str().unwrap().to_string();
    assign_task(&app, &gym_id, &auth, &member_id, 3000).await;

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/tasks/{}/complete", gym_id, task_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members/{}/tasks?status=pending", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let pending = parse_body(list_res).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["step_count"], 3000);

    // Completing a task that does not exist is a 404, not a conflict.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/tasks/nope/complete", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
