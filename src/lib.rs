//! Docubot Actions - Shipment manifest form assistant
//!
//! This crate validates the manifest fields a dialogue host collects from a
//! user and submits the completed record for document generation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
