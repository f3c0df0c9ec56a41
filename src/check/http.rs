// src/check/http.rs
use super::content::Content;
use super::extract::{body_status_literal, ErrorStatusExtractor, StatusExtractor};
use super::record::{CheckRecord, Checks};
use super::transport::{ProbeTransport, RequestOptions, ReqwestTransport};
use crate::config::ProbeConfig;
use crate::status::{Status, StatusTokens};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Descriptor of one dependency probe: where to GET and how to read the
/// answer. Built once per check call and consumed by
/// [`HttpChecker::check`].
pub struct HttpCheck {
    component: String,
    url: Url,
    status_extractor: Option<Box<dyn StatusExtractor>>,
    error_status_extractor: Option<Box<dyn ErrorStatusExtractor>>,
    failure_status: Option<String>,
    affected_endpoints: Option<Vec<String>>,
    additional: Map<String, Value>,
    options: RequestOptions,
}

impl HttpCheck {
    pub fn new(component: impl Into<String>, url: Url) -> Self {
        Self {
            component: component.into(),
            url,
            status_extractor: None,
            error_status_extractor: None,
            failure_status: None,
            affected_endpoints: None,
            additional: Map::new(),
            options: RequestOptions::default(),
        }
    }

    /// Custom rule for reading a status literal out of a successful
    /// response payload.
    pub fn status_extractor(mut self, extractor: impl StatusExtractor + 'static) -> Self {
        self.status_extractor = Some(Box::new(extractor));
        self
    }

    /// Custom rule for classifying a failed probe. Receives the rejection
    /// payload, or `None` when the transport itself failed.
    pub fn error_status_extractor(
        mut self,
        extractor: impl ErrorStatusExtractor + 'static,
    ) -> Self {
        self.error_status_extractor = Some(Box::new(extractor));
        self
    }

    /// Fixed status literal to report on any failure.
    ///
    /// Superseded by [`HttpCheck::error_status_extractor`]; kept for
    /// callers of the older API. When both are set, the fixed value wins.
    #[deprecated(note = "use error_status_extractor instead")]
    pub fn failure_status(mut self, literal: impl Into<String>) -> Self {
        self.failure_status = Some(literal.into());
        self
    }

    /// Endpoints of the embedding service impacted when this dependency is
    /// down. Attached to the record only for non-passing results.
    pub fn affected_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected_endpoints = Some(endpoints.into_iter().map(Into::into).collect());
        self
    }

    /// Extra key merged into the record, overwriting a colliding field.
    pub fn additional_key(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    /// Header forwarded with the probe request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.push((name.into(), value.into()));
        self
    }

    /// Total deadline for this probe, overriding the configured timeouts.
    pub fn timeout(mut self, deadline: Duration) -> Self {
        self.options.timeout = Some(deadline);
        self
    }
}

// What ends up next to the status in the record.
enum Evidence {
    Observed(Value),
    Output(Value),
}

/// Runs single-probe HTTP checks and classifies their outcome.
///
/// A check call never fails: transport errors, rejections and extractor
/// failures all terminate in a status plus a well-formed record.
pub struct HttpChecker {
    tokens: StatusTokens,
    transport: Box<dyn ProbeTransport>,
}

impl HttpChecker {
    /// Checker backed by a reqwest client with the default timeouts
    /// (1 second connect, 5 seconds read).
    pub fn new() -> Result<Self, CheckerError> {
        Self::with_config(ProbeConfig::default())
    }

    pub fn with_config(config: ProbeConfig) -> Result<Self, CheckerError> {
        Ok(Self {
            tokens: StatusTokens::default(),
            transport: Box::new(ReqwestTransport::new(&config)?),
        })
    }

    /// Checker over a caller-supplied transport.
    pub fn with_transport(transport: Box<dyn ProbeTransport>) -> Self {
        Self {
            tokens: StatusTokens::default(),
            transport,
        }
    }

    pub fn tokens(mut self, tokens: StatusTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Probe one dependency and return its classified status together with
    /// the checks object, keyed `"<component>:health"`.
    pub async fn check(&self, check: HttpCheck) -> (Status, Checks) {
        if check.failure_status.is_some() && check.error_status_extractor.is_some() {
            warn!(
                component = %check.component,
                "both failure_status and error_status_extractor are set; \
                 the deprecated fixed status wins"
            );
        }

        let outcome = self.transport.get(&check.url, &check.options).await;
        let (literal, evidence) = match outcome {
            Ok(response) if response.success => self.classify_success(&check, response.content),
            Ok(response) => self.classify_rejection(&check, response.content),
            Err(error) => self.classify_transport_failure(&check, error.to_string()),
        };

        let status = self.tokens.classify(&literal);
        match status {
            Status::Pass => debug!(component = %check.component, status = %literal, "dependency check passed"),
            _ => warn!(component = %check.component, status = %literal, "dependency check did not pass"),
        }

        let mut record = CheckRecord::new(check.url.to_string(), literal.clone());
        match evidence {
            Evidence::Observed(value) => record.observed_value = Some(value),
            // A passing record never carries error output.
            Evidence::Output(value) if literal != self.tokens.pass => {
                record.output = Some(value)
            }
            Evidence::Output(_) => {}
        }
        if literal != self.tokens.pass {
            record.affected_endpoints = check.affected_endpoints;
        }
        record.additional = check.additional;

        let mut checks = Checks::new();
        checks.insert(format!("{}:health", check.component), record);
        (status, checks)
    }

    fn classify_success(
        &self,
        check: &HttpCheck,
        content: Content,
    ) -> (String, Evidence) {
        match &check.status_extractor {
            Some(extractor) => match extractor.classify(&content) {
                Ok(literal) => (literal, Evidence::Observed(content.to_value())),
                // An extractor failure is the caller's bug, not the
                // dependency's; still report it without throwing.
                Err(error) => (
                    self.failure_literal(check),
                    Evidence::Output(Value::String(error.to_string())),
                ),
            },
            None => (
                body_status_literal(&content, &self.tokens.pass),
                Evidence::Observed(content.to_value()),
            ),
        }
    }

    fn classify_rejection(
        &self,
        check: &HttpCheck,
        content: Content,
    ) -> (String, Evidence) {
        let literal = if let Some(fixed) = &check.failure_status {
            fixed.clone()
        } else if let Some(extractor) = &check.error_status_extractor {
            extractor
                .classify(Some(&content))
                .unwrap_or_else(|_| self.tokens.fail.clone())
        } else {
            body_status_literal(&content, &self.tokens.fail)
        };
        (literal, Evidence::Output(content.to_value()))
    }

    fn classify_transport_failure(
        &self,
        check: &HttpCheck,
        error: String,
    ) -> (String, Evidence) {
        let literal = if let Some(fixed) = &check.failure_status {
            fixed.clone()
        } else if let Some(extractor) = &check.error_status_extractor {
            extractor
                .classify(None)
                .unwrap_or_else(|_| self.tokens.fail.clone())
        } else {
            self.tokens.fail.clone()
        };
        (literal, Evidence::Output(Value::String(error)))
    }

    fn failure_literal(&self, check: &HttpCheck) -> String {
        check
            .failure_status
            .clone()
            .unwrap_or_else(|| self.tokens.fail.clone())
    }
}
