//! The compiler collaborator contract.

use crate::diagnostic::Diagnostic;
use crate::error::CompileError;
use std::path::Path;
use std::sync::Arc;

/// Outcome of a successful compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Non-fatal diagnostics reported alongside the module.
    pub warnings: Vec<Diagnostic>,
}

impl CompileReport {
    /// Creates a report without diagnostics.
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }
}

/// Turns generated source text into a module at `output`.
///
/// Implementations must resolve all declarations in the unit regardless of
/// textual order: generated fields refer to classes declared later.
pub trait Compiler: Send + Sync {
    /// Compiles `source` and writes the module to `output`.
    ///
    /// # Errors
    /// Returns `CompileError::Failed` with the error diagnostics when the
    /// source does not compile, or another variant when the toolchain or the
    /// filesystem fails.
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError>;
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        (**self).compile(source, output)
    }
}

impl<C: Compiler + ?Sized> Compiler for Arc<C> {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        (**self).compile(source, output)
    }
}

impl<C: Compiler + ?Sized> Compiler for Box<C> {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        (**self).compile(source, output)
    }
}
