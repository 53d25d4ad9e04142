//! # Fixturegen Harness
//!
//! Turns fixture specs into modules on disk.
//!
//! This crate provides:
//! - [`FixtureBuilder`] for one fixture, the canonical batch, or a parallel batch
//! - A JSON manifest describing what was built
//! - A generation throughput report
//! - [`FixtureWorkspace`], a temporary directory holding the canonical
//!   fixtures for the lifetime of a benchmark run

pub mod builder;
pub mod error;
pub mod manifest;
pub mod report;
pub mod workspace;

pub use builder::{BuiltFixture, FixtureBuilder};
pub use error::FixtureError;
pub use manifest::{FixtureManifest, MANIFEST_FILE, ManifestEntry, write_manifest};
pub use report::{GenerationReport, measure_generation};
pub use workspace::FixtureWorkspace;
