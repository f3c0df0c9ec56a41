// src/check/redis.rs
use super::record::{CheckRecord, Checks};
use crate::status::{Status, StatusTokens};
use redis::Value;
use serde_json::json;
use tracing::{debug, warn};

/// Liveness check for a redis store: ping, then scan for a key pattern.
///
/// The scan must come back as a non-empty array of keys; an empty array or
/// any other reply shape fails the check. Connection URLs may carry
/// credentials, so the record reports a generic component type instead of
/// echoing the target.
pub struct RedisChecker {
    tokens: StatusTokens,
}

impl RedisChecker {
    pub fn new() -> Self {
        Self {
            tokens: StatusTokens::default(),
        }
    }

    pub fn tokens(mut self, tokens: StatusTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Probe the store at `url` and return the classified status together
    /// with the checks object, keyed `"redis:ping"`.
    pub async fn check(&self, url: &str, key_pattern: &str) -> (Status, Checks) {
        let (status, record) = match self.probe(url, key_pattern).await {
            Ok(keys) if keys_found(&keys) => {
                debug!(pattern = key_pattern, "redis check passed");
                let mut record =
                    CheckRecord::new("component", self.tokens.literal(Status::Pass));
                record.observed_value = Some(json!(format!("{key_pattern} can be found.")));
                (Status::Pass, record)
            }
            Ok(keys) => {
                warn!(pattern = key_pattern, "redis key scan came back empty");
                let mut record =
                    CheckRecord::new("component", self.tokens.literal(Status::Fail));
                record.output =
                    Some(json!(format!("{key_pattern} cannot be found in {keys:?}")));
                (Status::Fail, record)
            }
            Err(error) => {
                warn!(error = %error, "redis check failed");
                let mut record =
                    CheckRecord::new("component", self.tokens.literal(Status::Fail));
                record.output = Some(json!(error.to_string()));
                (Status::Fail, record)
            }
        };

        let mut checks = Checks::new();
        checks.insert("redis:ping".to_string(), record);
        (status, checks)
    }

    async fn probe(&self, url: &str, key_pattern: &str) -> Result<Value, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let mut connection = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut connection)
            .await?;
        redis::cmd("KEYS")
            .arg(key_pattern)
            .query_async::<Value>(&mut connection)
            .await
    }
}

impl Default for RedisChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn keys_found(reply: &Value) -> bool {
    matches!(reply, Value::Array(keys) if !keys.is_empty())
}
