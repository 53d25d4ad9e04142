//! Prelude module for convenient imports.
//!
//! ```ignore
//! use fixturegen::prelude::*;
//! ```

// Configuration
pub use fixturegen_core::{ConfigError, FixtureSpec, GenerationParameters, TypeSplit};

// Generation
pub use fixturegen_codegen::{
    CSharpEmitter, Generator, ProgramIr, generate_fixture, generate_source, generate_source_with,
};

// Compilation
pub use fixturegen_compiler::{
    CommandCompiler, CompileError, CompileReport, Compiler, Diagnostic, LockScope,
    LockedCompiler, Severity, SourceEmitter,
};

// Harness
pub use fixturegen_harness::{
    BuiltFixture, FixtureBuilder, FixtureError, FixtureWorkspace, GenerationReport,
    measure_generation, write_manifest,
};
