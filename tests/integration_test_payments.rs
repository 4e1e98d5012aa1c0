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
                "name": "Payer One",
                "phone": "+91-9876500010",
                "email": "payer@example.com",
                "plan": "12-month-premium",
                "start_date": "2025-06-01"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn add_payment(app: &TestApp, gym_id: &str, auth: &AuthHeaders, member_id: &str, amount: i64, status: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/members/{}/payments", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": "2025-08-01",
                "amount": amount,
                "payment_type": "membership",
                "status": status,
                "description": "August dues"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn get_summary(app: &TestApp, gym_id: &str, auth: &AuthHeaders, member_id: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members/{}/payments/summary", gym_id, member_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_payment_aggregation() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Cashflow Gym", "cashflow-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    // Empty history sums to zero.
    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["total_received"], 0);
    assert_eq!(summary["total_pending"], 0);

    add_payment(&app, &gym_id, &auth, &member_id, 15000, "paid").await;
    add_payment(&app, &gym_id, &auth, &member_id, 2000, "pending").await;

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["total_received"], 15000);
    assert_eq!(summary["total_pending"], 2000);

    // Failed payments count in neither bucket.
    add_payment(&app, &gym_id, &auth, &member_id, 500, "failed").await;

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["total_received"], 15000);
    assert_eq!(summary["total_pending"], 2000);
}

#[tokio::test]
async fn test_status_change_history_is_reconstructable() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Audit Gym", "audit-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    let payment_id = add_payment(&app, &gym_id, &auth, &member_id, 2000, "pending").await;

    // pending -> paid -> failed; both corrections are allowed.
    for status in ["paid", "failed"] {
        let res = app.router.clone().oneshot(
            Request::builder().method("PUT").uri(format!("/api/v1/{}/payments/{}", gym_id, payment_id))
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header("X-CSRF-Token", &auth.csrf_token)
                .header("Content-Type", "application/json")
                .body(Body::from(json!({"status": status}).to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let history_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/payments/{}/history", gym_id, payment_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let history = parse_body(history_res).await;
    let changes = history.as_array().unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0]["old_status"], "pending");
    assert_eq!(changes[0]["new_status"], "paid");
    assert_eq!(changes[1]["old_status"], "paid");
    assert_eq!(changes[1]["new_status"], "failed");

    // Updating without a status move leaves no audit row behind.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/payments/{}", gym_id, payment_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"description": "August dues (corrected)"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let history_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/payments/{}/history", gym_id, payment_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(history_res).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_deleting_payment_recomputes_aggregates() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Refund Gym", "refund-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    let paid_id = add_payment(&app, &gym_id, &auth, &member_id, 15000, "paid").await;
    add_payment(&app, &gym_id, &auth, &member_id, 2000, "pending").await;

    let del_res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/{}/payments/{}", gym_id, paid_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(del_res.status(), StatusCode::OK);

    let summary = get_summary(&app, &gym_id, &auth, &member_id).await;
    assert_eq!(summary["total_received"], 0);
    assert_eq!(summary["total_pending"], 2000);
}

#[tokio::test]
async fn test_payment_validation() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Picky Gym", "picky-gym").await;
    let member_id = create_member(&app, &gym_id, &auth).await;

    let cases = [
        json!({"date": "2025-08-01", "amount": 0, "payment_type": "membership", "description": "zero"}),
        json!({"date": "2025-08-01", "amount": -50, "payment_type": "membership", "description": "negative"}),
        json!({"date": "2025-08-01", "amount": 100, "payment_type": "subscription", "description": "bad type"}),
        json!({"date": "2025-08-01", "amount": 100, "payment_type": "pt", "status": "refunded", "description": "bad status"}),
    ];

    for payload in cases {
        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri(format!("/api/v1/{}/members/{}/payments", gym_id, member_id))
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header("X-CSRF-Token", &auth.csrf_token)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    // Unknown member is a 404.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/members/nope/payments", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": "2025-08-01", "amount": 100, "payment_type": "pt", "description": "ghost"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
