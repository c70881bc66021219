//! State changes the core asks the host to apply.

use serde::Serialize;

use super::field::FieldName;
use super::validator::NormalizedValue;

/// An instruction for the host's per-conversation state.
///
/// The core never mutates conversation state itself; it returns these and the
/// host applies them (see [`ManifestForm::apply`](super::ManifestForm::apply)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum HostDirective {
    /// Store `value` for `field`, or clear it when `None`.
    SetField {
        field: FieldName,
        value: Option<NormalizedValue>,
    },
    /// Return every field to unset.
    ResetAllFields,
}
