//! Fixture building.

use crate::error::FixtureError;
use fixturegen_codegen::{CSharpEmitter, Generator};
use fixturegen_compiler::{Compiler, Diagnostic, LockScope, LockedCompiler};
use fixturegen_core::{FixtureSpec, GenerationParameters, TypeSplit};
use std::path::{Path, PathBuf};
use std::thread;

/// A fixture that was generated and compiled.
#[derive(Debug, Clone)]
pub struct BuiltFixture {
    /// Spec the fixture was built from.
    pub spec: FixtureSpec,
    /// Interface/class split of the generated program.
    pub split: TypeSplit,
    /// Path of the compiled module.
    pub path: PathBuf,
    /// Size of the generated source text in bytes.
    pub source_bytes: usize,
    /// Warnings reported by the compiler.
    pub warnings: Vec<Diagnostic>,
}

/// Generates fixture source and hands it to a compiler.
///
/// Generation runs outside any lock; the compiler is wrapped in a
/// [`LockedCompiler`] so that one output path is written by one thread at a
/// time.
pub struct FixtureBuilder<C> {
    compiler: LockedCompiler<C>,
    params: GenerationParameters,
}

impl<C: Compiler> FixtureBuilder<C> {
    /// Creates a builder with default parameters and per-path locking.
    #[must_use]
    pub fn new(compiler: C) -> Self {
        Self::with_lock_scope(compiler, LockScope::PerPath)
    }

    /// Creates a builder with the given locking scope.
    #[must_use]
    pub fn with_lock_scope(compiler: C, scope: LockScope) -> Self {
        Self {
            compiler: LockedCompiler::with_scope(compiler, scope),
            params: GenerationParameters::default(),
        }
    }

    /// Sets the generation parameters.
    #[must_use]
    pub fn with_parameters(mut self, params: GenerationParameters) -> Self {
        self.params = params;
        self
    }

    /// Returns the generation parameters.
    #[must_use]
    pub fn parameters(&self) -> &GenerationParameters {
        &self.params
    }

    /// Returns the wrapped compiler.
    #[must_use]
    pub fn compiler(&self) -> &C {
        self.compiler.inner()
    }

    /// Generates and compiles one fixture into `out_dir`.
    ///
    /// # Errors
    /// Returns `FixtureError` if compilation fails or the output cannot be written.
    pub fn build(&self, spec: &FixtureSpec, out_dir: &Path) -> Result<BuiltFixture, FixtureError> {
        let ir = Generator::new(&self.params).program(&spec.name, spec.type_count);

        let unresolved = ir.unresolved_references();
        if !unresolved.is_empty() {
            tracing::warn!(
                fixture = %spec.name,
                references = ?unresolved,
                "fields reference types not declared in this unit"
            );
        }

        let source = CSharpEmitter::new(&ir).emit();
        let path = out_dir.join(&*spec.output_id);

        tracing::info!(
            fixture = %spec.name,
            types = spec.type_count.get(),
            bytes = source.len(),
            path = %path.display(),
            "compiling fixture"
        );

        let report = self
            .compiler
            .compile(&source, &path)
            .map_err(|e| FixtureError::from_compile(&spec.name, e))?;

        for warning in &report.warnings {
            tracing::debug!(fixture = %spec.name, %warning, "compiler warning");
        }

        Ok(BuiltFixture {
            spec: spec.clone(),
            split: ir.split,
            path,
            source_bytes: source.len(),
            warnings: report.warnings,
        })
    }

    /// Builds the small, medium and large fixtures into `out_dir`, in that order.
    ///
    /// Creates the directory if needed and stops at the first failure.
    ///
    /// # Errors
    /// Returns the first `FixtureError` encountered.
    pub fn build_all(&self, out_dir: &Path) -> Result<Vec<BuiltFixture>, FixtureError> {
        self.build_many(&FixtureSpec::CANONICAL, out_dir)
    }

    /// Builds `specs` sequentially into `out_dir`, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first `FixtureError` encountered.
    pub fn build_many(
        &self,
        specs: &[FixtureSpec],
        out_dir: &Path,
    ) -> Result<Vec<BuiltFixture>, FixtureError> {
        ensure_dir(out_dir)?;
        specs.iter().map(|spec| self.build(spec, out_dir)).collect()
    }

    /// Builds `specs` concurrently, one thread per spec.
    ///
    /// All fixtures run to completion; results keep the order of `specs` and
    /// the first failure in that order is returned.
    ///
    /// # Errors
    /// Returns the first `FixtureError` in spec order.
    pub fn build_many_parallel(
        &self,
        specs: &[FixtureSpec],
        out_dir: &Path,
    ) -> Result<Vec<BuiltFixture>, FixtureError> {
        ensure_dir(out_dir)?;

        let results: Vec<Result<BuiltFixture, FixtureError>> = thread::scope(|scope| {
            let handles: Vec<_> = specs
                .iter()
                .map(|spec| scope.spawn(move || self.build(spec, out_dir)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        results.into_iter().collect()
    }
}

/// Creates `dir` and its parents.
fn ensure_dir(dir: &Path) -> Result<(), FixtureError> {
    std::fs::create_dir_all(dir).map_err(|e| FixtureError::environment(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixturegen_compiler::{CompileError, CompileReport, SourceEmitter};
    use parking_lot::Mutex;

    /// Records every compiled output path and optionally rejects one fixture.
    #[derive(Default)]
    struct RecordingCompiler {
        compiled: Mutex<Vec<PathBuf>>,
        reject: Option<&'static str>,
    }

    impl Compiler for RecordingCompiler {
        fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
            self.compiled.lock().push(output.to_path_buf());
            if let Some(reject) = self.reject
                && output.ends_with(reject)
            {
                return Err(CompileError::Failed {
                    diagnostics: vec![Diagnostic::error("CS0246: missing type")],
                });
            }
            assert!(source.starts_with("using System;"));
            Ok(CompileReport {
                warnings: vec![Diagnostic::warning("unused field")],
            })
        }
    }

    fn compiled_names(compiler: &RecordingCompiler) -> Vec<String> {
        compiler
            .compiled
            .lock()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_build_writes_to_output_id() {
        let dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(SourceEmitter::new());

        let built = builder.build(&FixtureSpec::SMALL, dir.path()).unwrap();
        assert_eq!(built.path, dir.path().join("TestAssembly.Small.dll"));
        assert_eq!(built.split.interface_count, 5);
        assert_eq!(built.split.class_count, 45);

        let written = std::fs::read_to_string(&built.path).unwrap();
        assert_eq!(written.len(), built.source_bytes);
        assert!(written.contains("namespace TestAssembly.Small;"));
    }

    #[test]
    fn test_build_all_creates_directory_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("fixtures");
        let builder = FixtureBuilder::new(RecordingCompiler::default());

        let built = builder.build_all(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(built.len(), 3);
        assert_eq!(
            compiled_names(builder.compiler()),
            vec![
                "TestAssembly.Small.dll",
                "TestAssembly.Medium.dll",
                "TestAssembly.Large.dll"
            ]
        );
        assert_eq!(built[2].split.total(), 2000);
        assert_eq!(built[0].warnings.len(), 1);
    }

    #[test]
    fn test_build_all_is_fail_fast() {
        let dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(RecordingCompiler {
            reject: Some("TestAssembly.Medium.dll"),
            ..Default::default()
        });

        let err = builder.build_all(dir.path()).unwrap_err();
        match &err {
            FixtureError::Compilation {
                fixture,
                diagnostics,
            } => {
                assert_eq!(fixture, "TestAssembly.Medium");
                assert_eq!(diagnostics.len(), 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        // large is never attempted
        assert_eq!(
            compiled_names(builder.compiler()),
            vec!["TestAssembly.Small.dll", "TestAssembly.Medium.dll"]
        );
    }

    #[test]
    fn test_build_all_reports_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let builder = FixtureBuilder::new(SourceEmitter::new());

        let err = builder.build_all(&blocker.join("out")).unwrap_err();
        assert!(matches!(err, FixtureError::Environment { .. }));
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let sequential_dir = tempfile::tempdir().unwrap();
        let parallel_dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(SourceEmitter::new());

        let sequential = builder
            .build_many(&FixtureSpec::CANONICAL, sequential_dir.path())
            .unwrap();
        let parallel = builder
            .build_many_parallel(&FixtureSpec::CANONICAL, parallel_dir.path())
            .unwrap();

        assert_eq!(sequential.len(), parallel.len());
        for (seq, par) in sequential.iter().zip(&parallel) {
            assert_eq!(seq.spec, par.spec);
            assert_eq!(
                std::fs::read(&seq.path).unwrap(),
                std::fs::read(&par.path).unwrap()
            );
        }
    }

    #[test]
    fn test_parallel_build_returns_first_failure_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(RecordingCompiler {
            reject: Some("TestAssembly.Large.dll"),
            ..Default::default()
        });

        let err = builder
            .build_many_parallel(&FixtureSpec::CANONICAL, dir.path())
            .unwrap_err();
        assert_eq!(err.fixture(), Some("TestAssembly.Large"));
        assert_eq!(builder.compiler().compiled.lock().len(), 3);
    }

    #[test]
    fn test_custom_parameters_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let params = GenerationParameters::new()
            .with_interface_percentage(std::num::NonZeroUsize::new(2).unwrap());
        let builder = FixtureBuilder::new(SourceEmitter::new()).with_parameters(params);

        let spec = FixtureSpec::new("Custom.Dense", 40, "dense.cs").unwrap();
        let built = builder.build(&spec, dir.path()).unwrap();
        assert_eq!(built.split.interface_count, 20);
        assert_eq!(builder.parameters().interface_percentage.get(), 2);
    }
}
