//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ManifestGenerator` - Remote document generation for completed manifests

mod manifest_generator;

pub use manifest_generator::{GeneratedManifest, GeneratorError, ManifestGenerator};
