//! # Fixturegen Codegen
//!
//! Deterministic generation of synthetic C# programs.
//!
//! This crate provides:
//! - Index-to-name mapping for types and members
//! - Field, method, interface and class derivation from type indices
//! - A declaration IR that can be inspected without parsing text
//! - Rendering of the IR to a single C# compilation unit

pub mod csharp;
pub mod generator;
pub mod ir;
pub mod members;
pub mod naming;
pub mod types;

pub use csharp::CSharpEmitter;
pub use generator::Generator;
pub use ir::ProgramIr;
pub use members::MemberGenerator;
pub use types::TypeGenerator;

use fixturegen_core::{FixtureSpec, GenerationParameters};
use std::num::NonZeroUsize;

/// Generates the source of a program named `name` with `type_count` types,
/// using the default parameters.
#[must_use]
pub fn generate_source(name: &str, type_count: NonZeroUsize) -> String {
    generate_source_with(name, type_count, &GenerationParameters::default())
}

/// Generates the source of a program with explicit parameters.
#[must_use]
pub fn generate_source_with(
    name: &str,
    type_count: NonZeroUsize,
    params: &GenerationParameters,
) -> String {
    Generator::new(params).generate(name, type_count)
}

/// Generates the source for a fixture spec.
#[must_use]
pub fn generate_fixture(spec: &FixtureSpec, params: &GenerationParameters) -> String {
    generate_source_with(&spec.name, spec.type_count, params)
}
