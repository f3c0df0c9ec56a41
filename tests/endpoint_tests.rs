// tests/endpoint_tests.rs
#![cfg(feature = "axum")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use healthrs::check::Checks;
use healthrs::config::EndpointConfig;
use healthrs::endpoint::{consul_health_router, health_router, HealthResult};
use healthrs::status::{Status, StatusTokens};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get_health(router: axum::Router) -> (StatusCode, Option<String>, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

fn release_config() -> EndpointConfig {
    EndpointConfig {
        release_id: Some("1.2.3".to_string()),
        ..EndpointConfig::default()
    }
}

#[tokio::test]
async fn consul_warn_yields_429_and_derived_version() {
    let router = consul_health_router(
        || async { HealthResult::Ok((Status::Warn, Checks::new())) },
        release_config(),
    );

    let (code, content_type, body) = get_health(router).await;
    assert_eq!(code, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(content_type.as_deref(), Some("application/health+json"));
    assert_eq!(
        body,
        json!({
            "checks": {},
            "releaseId": "1.2.3",
            "status": "warn",
            "version": "1",
        })
    );
}

#[tokio::test]
async fn plain_mapping_keeps_warn_at_200() {
    let router = health_router(
        || async { HealthResult::Ok((Status::Warn, Checks::new())) },
        release_config(),
    );

    let (code, _, body) = get_health(router).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["status"], "warn");
}

#[tokio::test]
async fn passing_service_answers_200() {
    let router = consul_health_router(
        || async { HealthResult::Ok((Status::Pass, Checks::new())) },
        EndpointConfig::default(),
    );

    let (code, content_type, body) = get_health(router).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/health+json"));
    assert_eq!(body, json!({"checks": {}, "status": "pass"}));
}

#[tokio::test]
async fn failing_health_function_becomes_a_fail_response() {
    let router = consul_health_router(
        || async { HealthResult::Err("database exploded".into()) },
        release_config(),
    );

    let (code, _, body) = get_health(router).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["output"], "database exploded");
    // No checks object when the aggregate function itself failed.
    assert!(body.get("checks").is_none());
    assert_eq!(body["releaseId"], "1.2.3");
    assert_eq!(body["version"], "1");
}

#[tokio::test]
async fn failing_service_answers_400_on_both_mappings() {
    for router in [
        health_router(
            || async { HealthResult::Ok((Status::Fail, Checks::new())) },
            EndpointConfig::default(),
        ),
        consul_health_router(
            || async { HealthResult::Ok((Status::Fail, Checks::new())) },
            EndpointConfig::default(),
        ),
    ] {
        let (code, _, body) = get_health(router).await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
    }
}

#[tokio::test]
async fn configured_tokens_reach_the_response_body() {
    let config = EndpointConfig {
        tokens: StatusTokens::new("ok", "warn", "error"),
        ..EndpointConfig::default()
    };
    let router = consul_health_router(
        || async { HealthResult::Ok((Status::Fail, Checks::new())) },
        config,
    );

    let (code, _, body) = get_health(router).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn static_fields_flow_through() {
    let config = EndpointConfig {
        version: Some("2".to_string()),
        release_id: Some("1.2.3".to_string()),
        notes: Some(vec!["migrating shard 3".to_string()]),
        service_id: Some("service-1".to_string()),
        description: Some("inventory api".to_string()),
        ..EndpointConfig::default()
    };
    let router = consul_health_router(
        || async { HealthResult::Ok((Status::Pass, Checks::new())) },
        config,
    );

    let (_, _, body) = get_health(router).await;
    assert_eq!(
        body,
        json!({
            "checks": {},
            "status": "pass",
            "version": "2",
            "releaseId": "1.2.3",
            "notes": ["migrating shard 3"],
            "serviceId": "service-1",
            "description": "inventory api",
        })
    );
}
