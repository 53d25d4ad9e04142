//! Error types for fixture materialisation.

use fixturegen_compiler::{CompileError, Diagnostic};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for building fixtures.
///
/// Generation itself cannot fail; every variant originates in the compile
/// step or the filesystem. Nothing is retried.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The compiler rejected the generated source.
    #[error("compilation failed for {fixture}:\n{}", join_messages(.diagnostics))]
    Compilation {
        /// Fixture name.
        fixture: String,
        /// Error diagnostics reported by the compiler.
        diagnostics: Vec<Diagnostic>,
    },

    /// The output location could not be created or written.
    #[error("environment failure at {}: {source}", path.display())]
    Environment {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The compiler did not finish in time.
    #[error("compilation of {fixture} timed out after {timeout:?}")]
    Timeout {
        /// Fixture name.
        fixture: String,
        /// Configured timeout.
        timeout: Duration,
    },

    /// The compiler could not be run at all.
    #[error("toolchain failure for {fixture}: {source}")]
    Toolchain {
        /// Fixture name.
        fixture: String,
        /// Underlying compiler error.
        #[source]
        source: CompileError,
    },

    /// The manifest could not be serialized.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl FixtureError {
    /// Creates an environment error for `path`.
    pub fn environment(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Environment {
            path: path.into(),
            source,
        }
    }

    /// Tags a compiler error with the fixture it happened in.
    pub fn from_compile(fixture: &str, error: CompileError) -> Self {
        match error {
            CompileError::Failed { diagnostics } => Self::Compilation {
                fixture: fixture.to_string(),
                diagnostics,
            },
            CompileError::Timeout { timeout } => Self::Timeout {
                fixture: fixture.to_string(),
                timeout,
            },
            CompileError::Io { path, source } => Self::Environment { path, source },
            other @ CompileError::Spawn { .. } => Self::Toolchain {
                fixture: fixture.to_string(),
                source: other,
            },
        }
    }

    /// Returns the fixture name, if the error is tied to one.
    #[must_use]
    pub fn fixture(&self) -> Option<&str> {
        match self {
            Self::Compilation { fixture, .. }
            | Self::Timeout { fixture, .. }
            | Self::Toolchain { fixture, .. } => Some(fixture.as_str()),
            Self::Environment { .. } | Self::Manifest(_) => None,
        }
    }
}

fn join_messages(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
