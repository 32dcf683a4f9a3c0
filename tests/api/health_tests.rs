//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_string, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"healthy\""));
}

#[tokio::test]
async fn test_liveness_returns_alive() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"alive\""));
}

#[tokio::test]
async fn test_readiness_reports_database_status() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    // 200 with a healthy database, 503 when it is unreachable; either way
    // the probe must answer with a status report rather than hang or panic.
    assert!(
        response.status() == StatusCode::OK
            || response.status() == StatusCode::SERVICE_UNAVAILABLE
    );
    let body = body_string(response).await;
    assert!(body.contains("\"database\""));
}
