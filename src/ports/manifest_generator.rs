//! Manifest Generator Port - Remote document generation.
//!
//! The generation backend turns a completed [`ManifestRecord`] into a
//! downloadable document. The application layer depends on this trait; the
//! HTTP adapter provides the implementation.
//!
//! # Example
//!
//! ```ignore
//! let generator: Arc<dyn ManifestGenerator> = Arc::new(HttpManifestGenerator::new(config)?);
//!
//! match generator.generate(&record).await {
//!     Ok(generated) => println!("ready at {:?}", generated.file_url),
//!     Err(GeneratorError::Rejected { status }) => println!("backend said {}", status),
//!     Err(GeneratorError::Transport(reason)) => println!("unreachable: {}", reason),
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::manifest::ManifestRecord;

/// Port for the manifest generation backend.
///
/// # Contract
///
/// Implementations must:
/// - Make exactly one attempt per call, with no retries
/// - Return `Rejected` when the backend answers with a non-success status
/// - Return `Transport` when no response was received
/// - Tolerate success bodies without a `file_url`
#[async_trait]
pub trait ManifestGenerator: Send + Sync {
    /// Requests a document for `record`.
    async fn generate(&self, record: &ManifestRecord) -> Result<GeneratedManifest, GeneratorError>;
}

/// Successful generation response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedManifest {
    /// Download link, when the backend provided one.
    pub file_url: Option<String>,
}

impl GeneratedManifest {
    pub fn with_url(file_url: impl Into<String>) -> Self {
        Self {
            file_url: Some(file_url.into()),
        }
    }
}

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The request never completed (connection, DNS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },
}

impl GeneratorError {
    pub fn transport(reason: impl Into<String>) -> Self {
        GeneratorError::Transport(reason.into())
    }

    pub fn rejected(status: u16) -> Self {
        GeneratorError::Rejected { status }
    }
}
