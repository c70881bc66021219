//! Manifest module - Field validation and submission outcomes.
//!
//! A shipment manifest is collected one field at a time. The host hands each
//! raw value to [`validate_field`], relays any [`CorrectionPrompt`] to the
//! user, and stores the [`NormalizedValue`] once a field is valid. When every
//! field is valid, [`ManifestForm::to_record`] yields the [`ManifestRecord`]
//! that is submitted exactly once; the resulting [`SubmissionResult`] always
//! instructs the host to reset the form.

mod directive;
mod errors;
mod field;
mod form;
mod record;
mod slot_value;
mod submission;
mod validator;

pub use directive::HostDirective;
pub use errors::{ManifestError, UnknownFieldError};
pub use field::{Field, FieldKind, FieldName, FieldStatus};
pub use form::ManifestForm;
pub use record::ManifestRecord;
pub use slot_value::SlotValue;
pub use submission::{
    SubmissionOutcome, SubmissionResult, BACKEND_REJECTED_MESSAGE, URL_UNAVAILABLE,
};
pub use validator::{
    parse_amount, parse_weight, validate_field, CorrectionPrompt, FieldValidation,
    NormalizedValue, ParseFailure, PromptKind, WEIGHT_UNITS,
};

#[cfg(test)]
pub(crate) use record::fixtures;
