//! # Fixturegen
//!
//! Deterministic synthetic C# programs for benchmarking tools that analyse
//! compiled assemblies.
//!
//! Every structural property of a generated program (interfaces, abstract
//! and sealed classes, member counts, visibility) is derived from a type
//! index and a handful of frequency parameters, so the same fixture spec
//! always yields byte-identical source.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fixturegen::prelude::*;
//!
//! let builder = FixtureBuilder::new(CommandCompiler::csc());
//! let built = builder.build_all(Path::new("target/fixtures"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Fixture specs and generation parameters
//! - [`codegen`] - Declaration IR and C# rendering
//! - [`compiler`] - Compiler boundary, diagnostics, path locking
//! - [`harness`] - Batch building, manifests, temporary workspaces

pub mod prelude;

/// Fixture specs and generation parameters.
pub mod core {
    pub use fixturegen_core::*;
}

/// Program generation and C# rendering.
pub mod codegen {
    pub use fixturegen_codegen::*;
}

/// Compiler boundary.
pub mod compiler {
    pub use fixturegen_compiler::*;
}

/// Fixture materialisation.
pub mod harness {
    pub use fixturegen_harness::*;
}
