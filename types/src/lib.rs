//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod profile;
mod project;
pub mod ui;

pub use profile::{Profile, SocialLink};
pub use project::{CatalogError, ProjectCatalog, ProjectId, ProjectRecord};
