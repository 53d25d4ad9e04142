//! # Fixturegen Core
//!
//! Core types shared by the fixturegen crates.
//!
//! This crate provides:
//! - Fixture specifications and the canonical small/medium/large registry
//! - Generation parameters controlling the structural distribution
//! - Error types for invalid configuration

pub mod error;
pub mod params;
pub mod spec;

pub use error::{ConfigError, Result};
pub use params::{GenerationParameters, TypeSplit};
pub use spec::FixtureSpec;
