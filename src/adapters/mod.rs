//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `manifest` - Document generation backends (HTTP, mock)
//! - `http` - Action webhook served to the dialogue host

pub mod http;
pub mod manifest;

pub use manifest::{HttpGeneratorConfig, HttpManifestGenerator, MockManifestGenerator};
