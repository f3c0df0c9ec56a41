// src/check/transport.rs
use super::content::Content;
use crate::config::ProbeConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Error raised while issuing or parsing a probe. Always caught by the
/// checker and downgraded to a status.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of one probe round trip, classified by the transport's own
/// success rule (2xx for HTTP).
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub success: bool,
    pub content: Content,
}

/// Per-check overrides forwarded to the transport.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    /// Total deadline for the probe, overriding the configured pair.
    pub timeout: Option<Duration>,
}

/// One probe round trip: execute a GET, report success or failure, hand
/// back the parsed payload.
///
/// One implementation per HTTP client library; the embedding application
/// picks which one backs its checker.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn get(&self, url: &Url, options: &RequestOptions)
        -> Result<ProbeResponse, TransportError>;
}

/// Default transport backed by a reqwest client.
pub struct ReqwestTransport {
    client: Client,
    overall_timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.read_timeout())
            .build()?;
        Ok(Self {
            client,
            overall_timeout: config.connect_timeout() + config.read_timeout(),
        })
    }
}

#[async_trait]
impl ProbeTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &Url,
        options: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        let deadline = options.timeout.unwrap_or(self.overall_timeout);
        match timeout(deadline, self.fetch(url, options)).await {
            Ok(outcome) => outcome,
            Err(_) => Err("request timed out".into()),
        }
    }
}

impl ReqwestTransport {
    async fn fetch(
        &self,
        url: &Url,
        options: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        let mut request = self.client.get(url.clone());
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(deadline) = options.timeout {
            request = request.timeout(deadline);
        }

        let response = request.send().await?;
        let success = response.status().is_success();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;
        let content = Content::from_response_parts(content_type.as_deref(), body)?;

        Ok(ProbeResponse { success, content })
    }
}
