//! Temporary fixture directory for benchmark runs.

use crate::builder::{BuiltFixture, FixtureBuilder};
use crate::error::FixtureError;
use fixturegen_compiler::Compiler;
use fixturegen_core::FixtureSpec;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding built fixtures.
///
/// The directory and everything in it is removed when the workspace is
/// dropped, unless [`FixtureWorkspace::keep`] is called.
#[derive(Debug)]
pub struct FixtureWorkspace {
    dir: TempDir,
    fixtures: Vec<BuiltFixture>,
}

impl FixtureWorkspace {
    /// Builds the canonical fixtures into a fresh temporary directory.
    ///
    /// # Errors
    /// Returns `FixtureError` if the directory cannot be created or any
    /// fixture fails to build.
    pub fn create<C: Compiler>(builder: &FixtureBuilder<C>) -> Result<Self, FixtureError> {
        Self::create_with(builder, &FixtureSpec::CANONICAL)
    }

    /// Builds `specs` into a fresh temporary directory.
    ///
    /// # Errors
    /// Same as [`FixtureWorkspace::create`].
    pub fn create_with<C: Compiler>(
        builder: &FixtureBuilder<C>,
        specs: &[FixtureSpec],
    ) -> Result<Self, FixtureError> {
        let dir = tempfile::Builder::new()
            .prefix("fixturegen-")
            .tempdir()
            .map_err(|e| FixtureError::environment(std::env::temp_dir(), e))?;
        let fixtures = builder.build_many(specs, dir.path())?;
        tracing::info!(
            path = %dir.path().display(),
            fixtures = fixtures.len(),
            "fixture workspace ready"
        );
        Ok(Self { dir, fixtures })
    }

    /// Root directory of the workspace.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path where the module for `spec` lives.
    #[must_use]
    pub fn path_of(&self, spec: &FixtureSpec) -> PathBuf {
        self.dir.path().join(&*spec.output_id)
    }

    /// All fixtures built into the workspace.
    #[must_use]
    pub fn fixtures(&self) -> &[BuiltFixture] {
        &self.fixtures
    }

    /// Returns the built fixture for `spec`, if it is part of the workspace.
    #[must_use]
    pub fn get(&self, spec: &FixtureSpec) -> Option<&BuiltFixture> {
        self.fixtures.iter().find(|fixture| fixture.spec == *spec)
    }

    /// Keeps the directory on disk and returns its path.
    #[must_use]
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }

    /// Removes the directory, reporting any failure.
    ///
    /// # Errors
    /// Returns `FixtureError::Environment` if removal fails.
    pub fn close(self) -> Result<(), FixtureError> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|e| FixtureError::environment(path, e))
    }
}
