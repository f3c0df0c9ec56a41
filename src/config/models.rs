// src/config/models.rs
use crate::status::StatusTokens;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Timeouts applied to outbound health probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    1
}

fn default_read_timeout_secs() -> u64 {
    5
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 || self.read_timeout_secs == 0 {
            bail!("probe timeouts must be non-zero");
        }
        Ok(())
    }
}

/// Static fields of the health endpoint response, typically loaded once at
/// service startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Wire literals for pass/warn/fail.
    #[serde(default)]
    pub tokens: StatusTokens,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release_id: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<String>>,
    #[serde(default)]
    pub links: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<()> {
        let tokens = &self.tokens;
        if tokens.pass.is_empty() || tokens.warn.is_empty() || tokens.fail.is_empty() {
            bail!("status tokens must be non-empty");
        }
        if tokens.pass == tokens.warn || tokens.warn == tokens.fail || tokens.pass == tokens.fail
        {
            bail!("status tokens must be pairwise distinct");
        }
        Ok(())
    }

    /// Apply the static fields to a response builder.
    pub fn apply(&self, builder: crate::response::ResponseBuilder) -> crate::response::ResponseBuilder {
        let mut builder = builder.tokens(self.tokens.clone());
        if let Some(version) = &self.version {
            builder = builder.version(version.clone());
        }
        if let Some(release_id) = &self.release_id {
            builder = builder.release_id(release_id.clone());
        }
        if let Some(notes) = &self.notes {
            builder = builder.notes(notes.clone());
        }
        if let Some(links) = &self.links {
            builder = builder.links(links.clone());
        }
        if let Some(service_id) = &self.service_id {
            builder = builder.service_id(service_id.clone());
        }
        if let Some(description) = &self.description {
            builder = builder.description(description.clone());
        }
        builder
    }
}
