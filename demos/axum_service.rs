// demos/axum_service.rs
//
// Minimal service wiring: a /health endpoint with the Consul code mapping,
// probing one optional HTTP dependency named via DEPENDENCY_URL.
use anyhow::Result;
use healthrs::check::{self, HttpCheck, HttpChecker};
use healthrs::config::EndpointConfig;
use healthrs::endpoint::{consul_health_router, HealthResult};
use std::sync::Arc;
use tracing::info;
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthrs=debug".parse()?),
        )
        .init();

    let config = EndpointConfig {
        release_id: Some("1.2.3".to_string()),
        ..EndpointConfig::default()
    };
    config.validate()?;

    let checker = Arc::new(HttpChecker::new()?);
    let dependency = std::env::var("DEPENDENCY_URL")
        .ok()
        .map(|raw| Url::parse(&raw))
        .transpose()?;

    let health_check = move || {
        let checker = checker.clone();
        let dependency = dependency.clone();
        async move {
            let mut results = Vec::new();
            if let Some(url) = dependency {
                let probe = HttpCheck::new("dependency", url)
                    .affected_endpoints(["/items"]);
                results.push(checker.check(probe).await);
            }
            HealthResult::Ok(check::combine(results))
        }
    };

    let app = consul_health_router(health_check, config);
    let addr = "0.0.0.0:8080";
    info!("serving GET /health on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
