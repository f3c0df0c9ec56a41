// src/response/codes.rs
use crate::status::Status;

/// HTTP status code for generic monitoring clients.
///
/// A failing service answers 400; a degraded one still answers 200 and is
/// expected to carry the detail in the body.
pub fn plain_status_code(status: Status) -> u16 {
    if status == Status::Fail {
        400
    } else {
        200
    }
}

/// HTTP status code for a Consul health-check agent.
///
/// Consul treats 429 as a warning and any other non-2xx as critical, so
/// warn gets its own code here. Literals the token set does not recognize
/// classify as pass upstream and land on 200.
pub fn consul_status_code(status: Status) -> u16 {
    match status {
        Status::Fail => 400,
        Status::Warn => 429,
        Status::Pass => 200,
    }
}
