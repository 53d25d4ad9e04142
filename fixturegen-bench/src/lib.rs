//! # Fixturegen Bench
//!
//! Shared setup for the fixturegen benchmarks.

use criterion::Criterion;
use fixturegen_compiler::SourceEmitter;
use fixturegen_harness::{FixtureBuilder, FixtureWorkspace};
use std::time::Duration;

/// Criterion settings for fixture benchmarks: 3 s warm-up, 10 samples.
#[must_use]
pub fn fixture_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .sample_size(10)
}

/// Builder that writes generated source instead of compiling it.
#[must_use]
pub fn source_builder() -> FixtureBuilder<SourceEmitter> {
    FixtureBuilder::new(SourceEmitter::new())
}

/// Builds the canonical fixtures once, panicking if that fails.
///
/// # Panics
///
/// Panics when a fixture cannot be written.
#[must_use]
pub fn canonical_workspace(builder: &FixtureBuilder<SourceEmitter>) -> FixtureWorkspace {
    match FixtureWorkspace::create(builder) {
        Ok(workspace) => workspace,
        Err(e) => panic!("failed to build fixtures: {e}"),
    }
}
