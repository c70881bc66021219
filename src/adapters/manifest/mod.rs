//! Manifest Generator Adapters.
//!
//! ## Available Adapters
//!
//! - `HttpManifestGenerator` - REST backend at `POST /api/manifiestos`
//! - `MockManifestGenerator` - Configurable mock for testing

mod http_generator;
mod mock_generator;

pub use http_generator::{HttpGeneratorConfig, HttpManifestGenerator, MANIFESTS_PATH};
pub use mock_generator::MockManifestGenerator;
