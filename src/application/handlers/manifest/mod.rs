//! Manifest handlers - Field validation and submission.

mod submit_manifest;
mod validate_manifest_form;

pub use submit_manifest::{SubmitManifestCommand, SubmitManifestHandler};
pub use validate_manifest_form::{
    ValidateManifestFormCommand, ValidateManifestFormHandler, ValidateManifestFormResult,
};
