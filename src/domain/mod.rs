//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `manifest` - Manifest fields, validation rules, records and submission outcomes

pub mod manifest;
