//! Generation throughput report.

use fixturegen_codegen::generate_fixture;
use fixturegen_core::{FixtureSpec, GenerationParameters};
use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Timing of repeated source generation for one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Fixture name.
    pub fixture: String,
    /// Types per generated program.
    pub type_count: usize,
    /// Size of one generated source text in bytes.
    pub source_bytes: usize,
    /// Number of runs.
    pub iterations: usize,
    /// Fastest run.
    pub fastest: Duration,
    /// Sum of all runs.
    pub total: Duration,
}

impl GenerationReport {
    /// Mean time per run.
    #[must_use]
    pub fn mean(&self) -> Duration {
        self.total / u32::try_from(self.iterations).unwrap_or(u32::MAX)
    }

    /// Types generated per second in the fastest run.
    #[must_use]
    pub fn types_per_second(&self) -> f64 {
        let secs = self.fastest.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.type_count as f64 / secs
    }
}

/// Generates `spec` `iterations` times, keeping the fastest and total time.
#[must_use]
pub fn measure_generation(
    spec: &FixtureSpec,
    params: &GenerationParameters,
    iterations: NonZeroUsize,
) -> GenerationReport {
    let mut fastest = Duration::MAX;
    let mut total = Duration::ZERO;
    let mut source_bytes = 0;

    for _ in 0..iterations.get() {
        let started = Instant::now();
        let source = generate_fixture(black_box(spec), params);
        let elapsed = started.elapsed();

        source_bytes = source.len();
        fastest = fastest.min(elapsed);
        total += elapsed;
    }

    tracing::debug!(
        fixture = %spec.name,
        iterations = iterations.get(),
        fastest = ?fastest,
        "measured generation"
    );

    GenerationReport {
        fixture: spec.name.to_string(),
        type_count: spec.type_count.get(),
        source_bytes,
        iterations: iterations.get(),
        fastest,
        total,
    }
}
