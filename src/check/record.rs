// src/check/record.rs
use chrono::{SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Checks object of a health response: one record per probed component,
/// keyed by `"<component>:<measurement>"`.
pub type Checks = BTreeMap<String, CheckRecord>;

/// Structured result of probing one dependency.
///
/// `status` holds the wire literal as reported, which is not necessarily a
/// canonical token when a custom extractor is in play. Exactly one of
/// `observed_value` and `output` is set, except that a passing record may
/// carry neither.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub component_type: String,
    pub status: String,
    pub time: String,
    pub observed_value: Option<Value>,
    pub output: Option<Value>,
    pub affected_endpoints: Option<Vec<String>>,
    pub additional: Map<String, Value>,
}

impl CheckRecord {
    /// New record stamped with the current UTC time.
    pub fn new(component_type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            status: status.into(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            observed_value: None,
            output: None,
            affected_endpoints: None,
            additional: Map::new(),
        }
    }

    /// Render the record as a JSON object. Additional caller-supplied keys
    /// are merged last and overwrite colliding fields.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "componentType".to_string(),
            Value::String(self.component_type.clone()),
        );
        map.insert("status".to_string(), Value::String(self.status.clone()));
        map.insert("time".to_string(), Value::String(self.time.clone()));
        if let Some(observed) = &self.observed_value {
            map.insert("observedValue".to_string(), observed.clone());
        }
        if let Some(output) = &self.output {
            map.insert("output".to_string(), output.clone());
        }
        if let Some(endpoints) = &self.affected_endpoints {
            map.insert(
                "affectedEndpoints".to_string(),
                Value::Array(endpoints.iter().cloned().map(Value::String).collect()),
            );
        }
        for (key, value) in &self.additional {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl Serialize for CheckRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
