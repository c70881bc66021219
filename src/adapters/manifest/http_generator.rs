//! HTTP Manifest Generator - Implementation of ManifestGenerator over REST.
//!
//! Posts the record as JSON to `{base_url}/api/manifiestos` and reads the
//! `file_url` from the response body.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpGeneratorConfig::new("http://playwright-bot:3001")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let generator = HttpManifestGenerator::new(config)?;
//! ```
//!
//! # Failure handling
//!
//! One attempt per call. Any non-2xx status is a rejection. A 2xx body that
//! cannot be read in full is a transport failure; one that arrives whole but
//! is not JSON, or lacks a string `file_url`, is a success without a link.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::GeneratorConfig;
use crate::domain::manifest::ManifestRecord;
use crate::ports::{GeneratedManifest, GeneratorError, ManifestGenerator};

/// Path of the generation endpoint relative to the base URL.
pub const MANIFESTS_PATH: &str = "/api/manifiestos";

/// Configuration for the HTTP generator.
#[derive(Debug, Clone)]
pub struct HttpGeneratorConfig {
    /// Backend root, e.g. `http://localhost:3001`.
    pub base_url: String,
    /// Transport timeout for the single request.
    pub timeout: Duration,
}

impl HttpGeneratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&GeneratorConfig> for HttpGeneratorConfig {
    fn from(config: &GeneratorConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Generation backend reached over HTTP.
pub struct HttpManifestGenerator {
    config: HttpGeneratorConfig,
    client: Client,
}

impl HttpManifestGenerator {
    /// Creates a generator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Transport` if the HTTP client cannot be built.
    pub fn new(config: HttpGeneratorConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generation endpoint URL.
    fn manifests_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            MANIFESTS_PATH
        )
    }

    fn describe_transport_error(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("request timed out after {}s", self.config.timeout.as_secs())
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            e.to_string()
        }
    }

    /// Pulls `file_url` out of a success body, tolerating any other shape.
    fn extract_file_url(body: &str) -> Option<String> {
        serde_json::from_str::<Value>(body)
            .ok()?
            .get("file_url")?
            .as_str()
            .map(str::to_string)
    }
}

#[async_trait]
impl ManifestGenerator for HttpManifestGenerator {
    async fn generate(&self, record: &ManifestRecord) -> Result<GeneratedManifest, GeneratorError> {
        let url = self.manifests_url();
        tracing::debug!(%url, "Posting manifest for generation");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(record)
            .send()
            .await
            .map_err(|e| {
                let reason = self.describe_transport_error(&e);
                tracing::warn!(%url, %reason, "Manifest backend unreachable");
                GeneratorError::transport(reason)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Manifest backend rejected request");
            return Err(GeneratorError::rejected(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            let reason = self.describe_transport_error(&e);
            tracing::warn!(%url, %reason, "Manifest backend response body unreadable");
            GeneratorError::transport(reason)
        })?;
        let file_url = Self::extract_file_url(&body);
        if file_url.is_none() {
            tracing::warn!("Manifest backend response has no file_url");
        }

        Ok(GeneratedManifest { file_url })
    }
}
