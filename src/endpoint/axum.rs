// src/endpoint/axum.rs
use crate::check::Checks;
use crate::config::EndpointConfig;
use crate::response::{
    consul_status_code, plain_status_code, ResponseBuilder, HEALTH_JSON_MEDIA_TYPE,
};
use crate::status::Status;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tracing::warn;

/// Outcome of the caller-supplied aggregate health function.
pub type HealthResult =
    Result<(Status, Checks), Box<dyn std::error::Error + Send + Sync>>;

/// `GET /health` route with the plain status-code mapping
/// (fail → 400, pass and warn → 200).
///
/// `health_check` is invoked per request; an `Err` is downgraded to a fail
/// response carrying the error message as `output`, so the endpoint never
/// surfaces a bare 5xx of its own.
pub fn health_router<F, Fut>(health_check: F, config: EndpointConfig) -> Router
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = HealthResult> + Send + 'static,
{
    router_with(health_check, config, plain_status_code)
}

/// `GET /health` route with the Consul status-code mapping
/// (fail → 400, warn → 429, pass → 200).
pub fn consul_health_router<F, Fut>(health_check: F, config: EndpointConfig) -> Router
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = HealthResult> + Send + 'static,
{
    router_with(health_check, config, consul_status_code)
}

fn router_with<F, Fut>(
    health_check: F,
    config: EndpointConfig,
    code_for: fn(Status) -> u16,
) -> Router
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = HealthResult> + Send + 'static,
{
    Router::new().route(
        "/health",
        get(move || {
            let health_check = health_check.clone();
            let config = config.clone();
            async move { respond(health_check().await, &config, code_for) }
        }),
    )
}

fn respond(
    outcome: HealthResult,
    config: &EndpointConfig,
    code_for: fn(Status) -> u16,
) -> Response {
    let (status, body) = match outcome {
        Ok((status, checks)) => (
            status,
            config.apply(ResponseBuilder::new(status)).checks(checks).build(),
        ),
        Err(error) => {
            warn!(error = %error, "health check function failed");
            (
                Status::Fail,
                config
                    .apply(ResponseBuilder::new(Status::Fail))
                    .output(error.to_string())
                    .build(),
            )
        }
    };

    let code = StatusCode::from_u16(code_for(status)).unwrap_or(StatusCode::OK);
    (
        code,
        [(header::CONTENT_TYPE, HEALTH_JSON_MEDIA_TYPE)],
        body.to_string(),
    )
        .into_response()
}
