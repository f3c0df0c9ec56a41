// src/check/content.rs
use serde_json::Value;

/// Parsed payload of a probe response: JSON when the Content-Type says so,
/// raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Json(Value),
    Text(String),
}

impl Content {
    /// Parse a response body according to its Content-Type header.
    ///
    /// A body advertised as JSON that does not parse is an error; it
    /// surfaces as a transport-level failure at the checker.
    pub fn from_response_parts(
        content_type: Option<&str>,
        body: String,
    ) -> Result<Content, serde_json::Error> {
        if content_type.is_some_and(is_json_media_type) {
            Ok(Content::Json(serde_json::from_str(&body)?))
        } else {
            Ok(Content::Text(body))
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Content::Json(value) => value.clone(),
            Content::Text(text) => Value::String(text.clone()),
        }
    }

    /// `status` field of a JSON object payload, if any.
    pub fn status_field(&self) -> Option<&str> {
        match self {
            Content::Json(Value::Object(map)) => map.get("status").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Prefix match on the Content-Type header against `application/json` and
/// `application/health+json`, case-insensitive, parameters ignored.
pub fn is_json_media_type(content_type: &str) -> bool {
    starts_with_ignore_case(content_type, "application/health+json")
        || starts_with_ignore_case(content_type, "application/json")
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
