//! # Fixturegen Compiler
//!
//! The boundary between generated source text and the toolchain that turns
//! it into a loadable module.
//!
//! This crate provides:
//! - The [`Compiler`] trait every collaborator implements
//! - Structured diagnostics parsed from compiler output
//! - An external-process compiler with a timeout
//! - A source-only emitter for machines without a toolchain
//! - Per-path (or global) mutual exclusion around compilation

pub mod command;
pub mod compiler;
pub mod diagnostic;
pub mod error;
pub mod lock;
pub mod source;

pub use command::CommandCompiler;
pub use compiler::{CompileReport, Compiler};
pub use diagnostic::{Diagnostic, Severity};
pub use error::CompileError;
pub use lock::{LockScope, LockedCompiler, PathLocks};
pub use source::SourceEmitter;
