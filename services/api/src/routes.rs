use crate::infra::{AppState, ContactRecord};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use team_pulse::assessment::{
    assessment_router, AssessmentRepository, AssessmentService, OwnerNotification, OwnerNotifier,
};
use tracing::warn;

pub(crate) fn with_service_routes<R, N>(service: Arc<AssessmentService<R, N>>) -> axum::Router
where
    R: AssessmentRepository + 'static,
    N: OwnerNotifier + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/contact", axum::routing::post(contact_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContactRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) organisation: Option<String>,
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) service: Option<String>,
    #[serde(default)]
    pub(crate) team_size: Option<String>,
    #[serde(default)]
    pub(crate) budget: Option<String>,
    #[serde(default)]
    pub(crate) timeline: Option<String>,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) assessment_id: Option<String>,
}

impl ContactRequest {
    fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name must not be empty");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Some("email must be a valid address");
        }
        if self.message.trim().is_empty() {
            return Some("message must not be empty");
        }
        None
    }
}

pub(crate) async fn contact_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ContactRequest>,
) -> impl IntoResponse {
    if let Some(reason) = payload.validation_error() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": reason })),
        );
    }

    let id = state.contacts.next_id();
    let record = ContactRecord {
        id: id.clone(),
        received_at: Utc::now(),
        name: payload.name,
        email: payload.email,
        organisation: payload.organisation,
        role: payload.role,
        service: payload.service,
        team_size: payload.team_size,
        budget: payload.budget,
        timeline: payload.timeline,
        message: payload.message,
        assessment_id: payload.assessment_id,
    };

    let notification = OwnerNotification {
        title: format!("New contact form submission from {}", record.name),
        content: format!(
            "Email: {} | Org: {} | Service: {} | Budget: {}\n\n{}",
            record.email,
            record.organisation.as_deref().unwrap_or("N/A"),
            record.service.as_deref().unwrap_or("N/A"),
            record.budget.as_deref().unwrap_or("N/A"),
            record.message
        ),
    };

    state.contacts.append(record);
    if let Err(error) = state.notifier.notify(notification) {
        warn!(contact_id = %id, %error, "contact notification failed, submission kept");
    }

    (StatusCode::OK, Json(json!({ "success": true, "id": id })))
}
