// src/response/mod.rs
mod body;
mod codes;

pub use body::ResponseBuilder;
pub use codes::{consul_status_code, plain_status_code};

/// Media type of the health response body.
pub const HEALTH_JSON_MEDIA_TYPE: &str = "application/health+json";
