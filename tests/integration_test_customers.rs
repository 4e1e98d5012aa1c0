mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::NaiveDate;
use common::TestApp;
use gym_backend::domain::models::customer::{Customer, NewCustomerParams};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn registration_payload() -> Value {
    json!({
        "full_name": "Asha Verma",
        "email": "asha@example.com",
        "phone": "+91-9876543210",
        "age": 28,
        "gender": "female",
        "address": "12 MG Road, Pune",
        "membership_type": "12-month-premium",
        "start_date": "2025-01-15"
    })
}

#[tokio::test]
async fn test_registration_and_conversion_flow() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Sweat Ledger", "sweat-ledger").await;

    // 1. Self-registration needs no auth; the QR code points here.
    let reg_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/register", gym_id))
            .header("Content-Type", "application/json")
            .body(Body::from(registration_payload().to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(reg_res.status(), StatusCode::OK);
    let customer = parse_body(reg_res).await;
    let customer_id = customer["id"].as_str().unwrap().to_string();
    assert!(customer["customer_code"].as_str().unwrap().starts_with("GYM-"));
    assert_eq!(customer["status"], "pending");

    // 2. Admin approves the registration.
    let approve_res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/customers/{}/status", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "approved"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(approve_res.status(), StatusCode::OK);
    assert_eq!(parse_body(approve_res).await["status"], "approved");

    // 3. Conversion creates the member with registration data carried over.
    let convert_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/customers/{}/convert", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(convert_res.status(), StatusCode::OK);
    let member = parse_body(convert_res).await;
    assert_eq!(member["name"], "Asha Verma");
    assert_eq!(member["email"], "asha@example.com");
    assert_eq!(member["plan"], "12-month-premium");
    assert_eq!(member["start_date"], "2025-01-15");
    assert_eq!(member["expiry_date"], "2026-01-15");
    assert_eq!(member["payment_due"], 0);
    assert!(member["photo"].is_null());

    // 4. The customer is terminally marked as member.
    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/customers", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let customers = parse_body(list_res).await;
    assert_eq!(customers[0]["status"], "member");

    // 5. Converting again fails and creates no second member.
    let convert_again = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/customers/{}/convert", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(convert_again.status(), StatusCode::CONFLICT);

    let members_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let members = parse_body(members_res).await;
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_conversion_without_valid_email_changes_nothing() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Email Gym", "email-gym").await;

    // The intake form rejects bad emails, so seed a legacy row directly.
    let customer = Customer::new(NewCustomerParams {
        gym_id: gym_id.clone(),
        full_name: "No Mail".to_string(),
        email: "no-mail".to_string(),
        phone: "+91-9876500004".to_string(),
        age: 35,
        gender: "male".to_string(),
        address: "Old Records Lane 7".to_string(),
        membership_type: "3-month-basic".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
    });
    app.state.customer_repo.create(&customer).await.unwrap();

    let convert_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/customers/{}/convert", gym_id, customer.id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(convert_res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // No member was created and the customer status is untouched.
    let members_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/members", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(members_res).await.as_array().unwrap().len(), 0);

    let stored = app.state.customer_repo.find_by_id(&gym_id, &customer.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "pending");
}

#[tokio::test]
async fn test_registration_validation() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Form Gym", "form-gym").await;

    let mut too_young = registration_payload();
    too_young["age"] = json!(5);

    let mut unknown_plan = registration_payload();
    unknown_plan["membership_type"] = json!("lifetime-gold");

    let mut short_name = registration_payload();
    short_name["full_name"] = json!("A");

    for payload in [too_young, unknown_plan, short_name] {
        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri(format!("/api/v1/{}/register", gym_id))
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/customers", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(list_res).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_status_endpoint_cannot_mint_members() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Status Gym", "status-gym").await;

    let reg_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/register", gym_id))
            .header("Content-Type", "application/json")
            .body(Body::from(registration_payload().to_string())).unwrap()
    ).await.unwrap();
    let customer = parse_body(reg_res).await;
    let customer_id = customer["id"].as_str().unwrap();

    // Setting status to "member" directly is refused; conversion is the
    // only path into membership.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/customers/{}/status", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "member"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // After conversion the status endpoint reports the terminal state.
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/customers/{}/convert", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/customers/{}/status", gym_id, customer_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "pending"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_csv_export() {
    let app = TestApp::new().await;
    let (gym_id, auth) = app.setup_gym("Export Gym", "export-gym").await;

    let mut payload = registration_payload();
    payload["address"] = json!("Flat 2, Hill View, Pune");

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/register", gym_id))
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();

    let export_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/{}/customers/export", gym_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(export_res.status(), StatusCode::OK);
    assert_eq!(
        export_res.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(export_res.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("Customer ID,Full Name,"));
    assert!(csv.contains("Asha Verma"));
    // The comma-bearing address is quoted.
    assert!(csv.contains("\"Flat 2, Hill View, Pune\""));
}
