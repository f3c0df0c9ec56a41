// src/endpoint/mod.rs
mod axum;

pub use self::axum::{consul_health_router, health_router, HealthResult};
