//! SubmitManifestHandler - Sends a completed record for document generation.

use std::sync::Arc;

use crate::domain::manifest::{ManifestRecord, SubmissionResult};
use crate::ports::{GeneratorError, ManifestGenerator};

/// Command to submit a completed manifest.
#[derive(Debug, Clone)]
pub struct SubmitManifestCommand {
    pub record: ManifestRecord,
}

/// Handler for manifest submission.
///
/// Makes exactly one generation attempt and never fails: every backend
/// outcome maps to a [`SubmissionResult`] whose directives reset the form.
pub struct SubmitManifestHandler {
    generator: Arc<dyn ManifestGenerator>,
}

impl SubmitManifestHandler {
    pub fn new(generator: Arc<dyn ManifestGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, cmd: SubmitManifestCommand) -> SubmissionResult {
        let result = match self.generator.generate(&cmd.record).await {
            Ok(generated) => SubmissionResult::ok(generated.file_url),
            Err(GeneratorError::Rejected { status }) => {
                tracing::warn!(status, "Manifest generation rejected by backend");
                SubmissionResult::rejected_by_backend()
            }
            Err(GeneratorError::Transport(reason)) => {
                tracing::warn!(%reason, "Manifest generation failed in transport");
                SubmissionResult::transport_error(reason)
            }
        };

        tracing::info!(
            outcome = ?result.outcome(),
            download_url = result.download_url().unwrap_or_default(),
            "Manifest submission finished"
        );

        result
    }
}
