//! Error types for compilation.

use crate::diagnostic::Diagnostic;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for compiler collaborator operations.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiler reported one or more errors.
    #[error("compiler reported {} error(s)", .diagnostics.len())]
    Failed {
        /// Error-severity diagnostics, in the order reported.
        diagnostics: Vec<Diagnostic>,
    },

    /// The compiler process could not be started.
    #[error("failed to start compiler '{program}': {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The compiler did not finish in time and was killed.
    #[error("compiler timed out after {timeout:?}")]
    Timeout {
        /// Configured timeout.
        timeout: Duration,
    },

    /// Reading or writing a file failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// Creates an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
