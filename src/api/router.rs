use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, gym, admin, member, payment, customer, task_step, program, dashboard};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Gym Public (branding for the intake form)
        .route("/api/v1/gyms/by-slug/{slug}", get(gym::get_gym_by_slug))

        // Gym Admin
        .route("/api/v1/gyms", post(gym::create_gym).put(gym::update_gym).get(gym::get_current_gym))
        .route("/api/v1/{gym_id}/admins", post(admin::create_admin).get(admin::list_admins))
        .route("/api/v1/{gym_id}/admins/{user_id}", delete(admin::delete_admin))

        // Members
        .route("/api/v1/{gym_id}/members", post(member::create_member).get(member::list_members))
        .route("/api/v1/{gym_id}/members/{member_id}", get(member::get_member).put(member::update_member).delete(member::delete_member))

        // Payments
        .route("/api/v1/{gym_id}/members/{member_id}/payments", post(payment::create_payment).get(payment::list_payments))
        .route("/api/v1/{gym_id}/members/{member_id}/payments/summary", get(payment::payment_summary))
        .route("/api/v1/{gym_id}/payments/{payment_id}", put(payment::update_payment).delete(payment::delete_payment))
        .route("/api/v1/{gym_id}/payments/{payment_id}/history", get(payment::payment_history))

        // Customer Intake (registration is public, behind the QR code)
        .route("/api/v1/{gym_id}/register", post(customer::register_customer))
        .route("/api/v1/{gym_id}/customers", get(customer::list_customers))
        .route("/api/v1/{gym_id}/customers/export", get(customer::export_customers))
        .route("/api/v1/{gym_id}/customers/{customer_id}/status", put(customer::update_customer_status))
        .route("/api/v1/{gym_id}/customers/{customer_id}/convert", post(customer::convert_customer))

        // Task Steps
        .route("/api/v1/{gym_id}/members/{member_id}/tasks", post(task_step::assign_task).get(task_step::list_tasks))
        .route("/api/v1/{gym_id}/members/{member_id}/tasks/summary", get(task_step::task_summary))
        .route("/api/v1/{gym_id}/tasks/{task_id}/complete", post(task_step::complete_task))
        .route("/api/v1/{gym_id}/tasks/{task_id}", delete(task_step::delete_task))

        // Trainers & Programs
        .route("/api/v1/{gym_id}/trainers", post(program::create_trainer).get(program::list_trainers))
        .route("/api/v1/{gym_id}/diet-plans", post(program::create_diet_plan).get(program::list_diet_plans))
        .route("/api/v1/{gym_id}/diet-plans/{plan_id}", get(program::get_diet_plan).put(program::update_diet_plan).delete(program::delete_diet_plan))
        .route("/api/v1/{gym_id}/diet-plans/{plan_id}/assign", post(program::assign_diet_plan))
        .route("/api/v1/{gym_id}/workouts", post(program::create_workout).get(program::list_workouts))
        .route("/api/v1/{gym_id}/workouts/{workout_id}", get(program::get_workout).put(program::update_workout).delete(program::delete_workout))
        .route("/api/v1/{gym_id}/workouts/{workout_id}/assign", post(program::assign_workout))
        .route("/api/v1/{gym_id}/members/{member_id}/programs", get(program::member_programs))

        // Dashboard
        .route("/api/v1/{gym_id}/dashboard/stats", get(dashboard::get_stats))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        gym_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
