use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::domain::AssessmentSubmission;
use crate::assessment::router::{assessment_router, result_handler, submit_handler};
use crate::assessment::service::AssessmentService;

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn submit_handler_returns_the_result_bundle() {
    let (service, _, _) = build_service();

    let response =
        submit_handler::<MemoryRepository, MemoryNotifier>(State(service), axum::Json(base_submission()))
            .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["assessment_id"].as_str().expect("id is a string").starts_with("tpd-"));
    assert_eq!(body["diagnostic"]["team_pulse_score"], 50);
    assert_eq!(body["diagnostic"]["risk_level"], "ELEVATED");
    assert_eq!(body["recommendation"]["type"], "HALF_DAY");
    assert_eq!(body["lead_band"], "B");
}

#[tokio::test]
async fn submit_handler_rejects_out_of_scale_ratings() {
    let (service, _, _) = build_service();

    let response = submit_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::Json(AssessmentSubmission {
            trust: 7,
            ..base_submission()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert!(body["error"].as_str().expect("error message").contains("trust"));
}

#[tokio::test]
async fn submit_handler_maps_conflicts_to_409() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response = submit_handler::<ConflictRepository, MemoryNotifier>(
        State(service),
        axum::Json(base_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_maps_unavailable_repositories_to_500() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response = submit_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(base_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn result_handler_hides_the_raw_lead_signals() {
    let (service, _, _) = build_service();
    let outcome = service.submit(base_submission()).expect("scores");

    let response = result_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::extract::Path(outcome.assessment_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["lead_band"], "B");
    assert!(body.get("lead").is_none(), "full lead score must stay internal");
    assert!(body["diagnostic"]["strengths"].as_array().expect("strengths").len() == 3);
}

#[tokio::test]
async fn result_handler_returns_404_for_unknown_assessments() {
    let (service, _, _) = build_service();

    let response = result_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::extract::Path("tpd-424242".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submit_route_accepts_json_payloads() {
    let (service, _, notifier) = build_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&high_risk_submission()).expect("serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["diagnostic"]["risk_level"], "CRITICAL");
    assert_eq!(notifier.events().len(), 1);
}
