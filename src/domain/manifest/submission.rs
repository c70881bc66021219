//! Submission outcomes and the messages relayed to the user.

use serde::Serialize;

use super::directive::HostDirective;

/// Shown in place of a download link when the backend omits one.
pub const URL_UNAVAILABLE: &str = "URL unavailable";

/// Fixed text for a backend that answered with a failure status.
pub const BACKEND_REJECTED_MESSAGE: &str =
    "Sorry, the manifest could not be generated right now. Please try again later.";

/// How a single submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Ok,
    RejectedByBackend,
    TransportError,
}

/// Result of one submission attempt, ready to relay to the user.
///
/// Every outcome is terminal for the attempt. Regardless of outcome the host
/// must clear the collected fields; see [`SubmissionResult::directives`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    outcome: SubmissionOutcome,
    download_url: Option<String>,
    message: String,
}

impl SubmissionResult {
    /// The backend generated the document. A missing link becomes
    /// [`URL_UNAVAILABLE`].
    pub fn ok(file_url: Option<String>) -> Self {
        let url = file_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| URL_UNAVAILABLE.to_string());
        Self {
            outcome: SubmissionOutcome::Ok,
            message: format!("Your manifest is ready! You can download it here: {}", url),
            download_url: Some(url),
        }
    }

    pub fn rejected_by_backend() -> Self {
        Self {
            outcome: SubmissionOutcome::RejectedByBackend,
            download_url: None,
            message: BACKEND_REJECTED_MESSAGE.to_string(),
        }
    }

    pub fn transport_error(reason: impl AsRef<str>) -> Self {
        Self {
            outcome: SubmissionOutcome::TransportError,
            download_url: None,
            message: format!(
                "Sorry, I couldn't reach the manifest service: {}",
                reason.as_ref()
            ),
        }
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == SubmissionOutcome::Ok
    }

    /// State changes the host applies after relaying the message.
    pub fn directives(&self) -> Vec<HostDirective> {
        vec![HostDirective::ResetAllFields]
    }
}
