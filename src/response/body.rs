// src/response/body.rs
use crate::check::Checks;
use crate::status::{Status, StatusTokens};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Assembles the health response document.
///
/// Only `status` is required. `version` and `release_id` interact: when a
/// release id is supplied without an explicit version, the public version
/// is derived as the MAJOR component of a `MAJOR.MINOR.PATCH` release id.
/// An explicit version is never overwritten.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status: Status,
    tokens: StatusTokens,
    version: Option<String>,
    release_id: Option<String>,
    notes: Option<Vec<String>>,
    output: Option<Value>,
    checks: Option<Checks>,
    links: Option<BTreeMap<String, String>>,
    service_id: Option<String>,
    description: Option<String>,
    extra: Map<String, Value>,
}

impl ResponseBuilder {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            tokens: StatusTokens::default(),
            version: None,
            release_id: None,
            notes: None,
            output: None,
            checks: None,
            links: None,
            service_id: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Wire literals to report the status with.
    pub fn tokens(mut self, tokens: StatusTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Public version of the service.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Implementation-facing release identifier, distinct from the public
    /// version derived from it.
    pub fn release_id(mut self, release_id: impl Into<String>) -> Self {
        self.release_id = Some(release_id.into());
        self
    }

    /// Notes relevant to the current state of health.
    pub fn notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes = Some(notes.into_iter().map(Into::into).collect());
        self
    }

    /// Raw error output, for fail or warn states.
    pub fn output(mut self, output: impl Into<Value>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Detailed statuses of the probed downstream systems.
    pub fn checks(mut self, checks: Checks) -> Self {
        self.checks = Some(checks);
        self
    }

    /// Link relations to more information about the endpoint's health.
    pub fn links(mut self, links: BTreeMap<String, String>) -> Self {
        self.links = Some(links);
        self
    }

    /// Unique identifier of the service in the application scope.
    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// Human-friendly description of the service.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Arbitrary extra field, merged verbatim into the document.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut body = Map::new();
        body.insert(
            "status".to_string(),
            Value::String(self.tokens.literal(self.status).to_string()),
        );

        if let Some(release_id) = self.release_id {
            let version = self
                .version
                .unwrap_or_else(|| major_component(&release_id).to_string());
            body.insert("releaseId".to_string(), Value::String(release_id));
            body.insert("version".to_string(), Value::String(version));
        } else if let Some(version) = self.version {
            body.insert("version".to_string(), Value::String(version));
        }

        if let Some(notes) = self.notes {
            body.insert(
                "notes".to_string(),
                Value::Array(notes.into_iter().map(Value::String).collect()),
            );
        }
        if let Some(output) = self.output {
            body.insert("output".to_string(), output);
        }
        if let Some(checks) = self.checks {
            let records = checks
                .into_iter()
                .map(|(key, record)| (key, record.to_value()))
                .collect();
            body.insert("checks".to_string(), Value::Object(records));
        }
        if let Some(links) = self.links {
            let links = links
                .into_iter()
                .map(|(rel, uri)| (rel, Value::String(uri)))
                .collect();
            body.insert("links".to_string(), Value::Object(links));
        }
        if let Some(service_id) = self.service_id {
            body.insert("serviceId".to_string(), Value::String(service_id));
        }
        if let Some(description) = self.description {
            body.insert("description".to_string(), Value::String(description));
        }

        for (key, value) in self.extra {
            body.insert(key, value);
        }

        Value::Object(body)
    }
}

fn major_component(release_id: &str) -> &str {
    release_id.split('.').next().unwrap_or(release_id)
}
