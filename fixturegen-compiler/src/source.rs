//! Source-only collaborator.

use crate::compiler::{CompileReport, Compiler};
use crate::error::CompileError;
use std::path::Path;

/// Writes the generated source verbatim to the output path.
///
/// Useful where no C# toolchain is installed and the consumer reads source
/// rather than a compiled module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceEmitter;

impl SourceEmitter {
    /// Creates a new source emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for SourceEmitter {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        std::fs::write(output, source).map_err(|e| CompileError::io(output, e))?;
        tracing::debug!(path = %output.display(), bytes = source.len(), "wrote source");
        Ok(CompileReport::clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_source_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.cs");
        let report = SourceEmitter::new().compile("namespace A;\n", &path).unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "namespace A;\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fixture.cs");
        let err = SourceEmitter::new().compile("x", &path).unwrap_err();
        assert!(matches!(err, CompileError::Io { .. }));
    }
}
