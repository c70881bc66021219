//! Mock Manifest Generator for testing.
//!
//! Queues canned outcomes and records every record it was asked to generate,
//! so tests can check both the mapping of outcomes and the single-attempt
//! policy without a running backend.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockManifestGenerator::new()
//!     .with_url("http://x/y.pdf")
//!     .with_error(GeneratorError::rejected(500));
//!
//! assert!(generator.generate(&record).await.is_ok());
//! assert!(generator.generate(&record).await.is_err());
//! assert_eq!(generator.call_count(), 2);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::manifest::ManifestRecord;
use crate::ports::{GeneratedManifest, GeneratorError, ManifestGenerator};

/// Mock generator with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockManifestGenerator {
    /// Pre-configured outcomes (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<GeneratedManifest, GeneratorError>>>>,
    /// Records received, in call order.
    calls: Arc<Mutex<Vec<ManifestRecord>>>,
}

impl MockManifestGenerator {
    /// Creates a generator that succeeds without a URL once its queue is empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a success carrying `file_url`.
    pub fn with_url(self, file_url: impl Into<String>) -> Self {
        self.with_result(Ok(GeneratedManifest::with_url(file_url)))
    }

    /// Queues a failure.
    pub fn with_error(self, error: GeneratorError) -> Self {
        self.with_result(Err(error))
    }

    /// Queues an arbitrary outcome.
    pub fn with_result(self, result: Result<GeneratedManifest, GeneratorError>) -> Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<ManifestRecord> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<GeneratedManifest, GeneratorError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(GeneratedManifest::default()))
    }
}

#[async_trait]
impl ManifestGenerator for MockManifestGenerator {
    async fn generate(&self, record: &ManifestRecord) -> Result<GeneratedManifest, GeneratorError> {
        self.calls.lock().unwrap().push(record.clone());
        self.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest::fixtures::complete_record;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let generator = MockManifestGenerator::new()
            .with_url("http://x/1.pdf")
            .with_error(GeneratorError::rejected(503));
        let record = complete_record();

        assert_eq!(
            generator.generate(&record).await,
            Ok(GeneratedManifest::with_url("http://x/1.pdf"))
        );
        assert_eq!(
            generator.generate(&record).await,
            Err(GeneratorError::rejected(503))
        );
    }

    #[tokio::test]
    async fn defaults_to_success_without_url() {
        let generator = MockManifestGenerator::new();
        let result = generator.generate(&complete_record()).await;
        assert_eq!(result, Ok(GeneratedManifest::default()));
    }

    #[tokio::test]
    async fn records_calls() {
        let generator = MockManifestGenerator::new();
        let record = complete_record();

        generator.generate(&record).await.unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.get_calls(), vec![record]);
    }
}
