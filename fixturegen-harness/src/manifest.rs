//! JSON manifest of built fixtures.

use crate::builder::BuiltFixture;
use crate::error::FixtureError;
use fixturegen_core::GenerationParameters;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "fixtures.json";

/// Description of one built fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Fixture name.
    pub name: String,
    /// Total number of types.
    pub type_count: usize,
    /// Number of interfaces.
    pub interface_count: usize,
    /// Number of classes.
    pub class_count: usize,
    /// Module file name relative to the output directory.
    pub output: String,
    /// Size of the generated source text in bytes.
    pub source_bytes: usize,
    /// Number of compiler warnings.
    pub warnings: usize,
}

impl From<&BuiltFixture> for ManifestEntry {
    fn from(fixture: &BuiltFixture) -> Self {
        Self {
            name: fixture.spec.name.to_string(),
            type_count: fixture.spec.type_count.get(),
            interface_count: fixture.split.interface_count,
            class_count: fixture.split.class_count,
            output: fixture.spec.output_id.to_string(),
            source_bytes: fixture.source_bytes,
            warnings: fixture.warnings.len(),
        }
    }
}

/// Manifest written next to the built fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureManifest {
    /// Parameters the fixtures were generated with.
    pub parameters: GenerationParameters,
    /// Built fixtures in build order.
    pub fixtures: Vec<ManifestEntry>,
}

impl FixtureManifest {
    /// Creates a manifest for `fixtures`.
    #[must_use]
    pub fn new(parameters: GenerationParameters, fixtures: &[BuiltFixture]) -> Self {
        Self {
            parameters,
            fixtures: fixtures.iter().map(ManifestEntry::from).collect(),
        }
    }

    /// Serializes the manifest as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `FixtureError::Manifest` if serialization fails.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `fixtures.json` into `out_dir` and returns its path.
///
/// # Errors
/// Returns `FixtureError` if serialization or the write fails.
pub fn write_manifest(
    out_dir: &Path,
    parameters: GenerationParameters,
    fixtures: &[BuiltFixture],
) -> Result<PathBuf, FixtureError> {
    let manifest = FixtureManifest::new(parameters, fixtures);
    let path = out_dir.join(MANIFEST_FILE);
    std::fs::write(&path, manifest.to_json()?)
        .map_err(|e| FixtureError::environment(&path, e))?;
    tracing::info!(path = %path.display(), fixtures = fixtures.len(), "wrote manifest");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FixtureBuilder;
    use fixturegen_compiler::SourceEmitter;
    use fixturegen_core::FixtureSpec;

    #[test]
    fn test_manifest_entries() {
        let dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(SourceEmitter::new());
        let built = builder
            .build_many(&[FixtureSpec::SMALL], dir.path())
            .unwrap();

        let manifest = FixtureManifest::new(*builder.parameters(), &built);
        assert_eq!(manifest.fixtures.len(), 1);
        let entry = &manifest.fixtures[0];
        assert_eq!(entry.name, "TestAssembly.Small");
        assert_eq!(entry.type_count, 50);
        assert_eq!(entry.interface_count, 5);
        assert_eq!(entry.class_count, 45);
        assert_eq!(entry.output, "TestAssembly.Small.dll");
        assert_eq!(entry.warnings, 0);
        assert!(entry.source_bytes > 0);
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let builder = FixtureBuilder::new(SourceEmitter::new());
        let built = builder.build_all(dir.path()).unwrap();

        let path = write_manifest(dir.path(), *builder.parameters(), &built).unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["parameters"]["interface_percentage"], 10);
        assert_eq!(json["fixtures"].as_array().unwrap().len(), 3);
        assert_eq!(json["fixtures"][2]["type_count"], 2000);
        assert_eq!(json["fixtures"][1]["class_count"], 450);
    }
}
