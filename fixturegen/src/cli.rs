//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use fixturegen::compiler::command::CSC_ARGS;
use fixturegen::prelude::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "fixturegen")]
#[command(about = "Generate synthetic C# test assemblies for benchmarking")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Directory the fixtures are written to
    #[arg(required = true)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub build: BuildArgs,

    #[command(flatten)]
    pub params: ParamArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the generated source of one program to stdout
    Print {
        /// Namespace of the generated program
        #[arg(long, default_value = "TestAssembly.Small")]
        name: String,

        /// Number of types to generate
        #[arg(long, default_value = "50")]
        types: NonZeroUsize,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Time source generation for the canonical fixtures
    Report {
        /// Generation runs per fixture
        #[arg(long, default_value = "10")]
        iterations: NonZeroUsize,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Fixture to build (small, medium, large); repeatable, defaults to all
    #[arg(long = "fixture", value_name = "NAME")]
    pub fixtures: Vec<String>,

    /// Build fixtures concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Write generated source instead of invoking a compiler
    #[arg(long)]
    pub emit_source: bool,

    /// Compiler executable
    #[arg(long, default_value = "csc", env = "FIXTUREGEN_COMPILER")]
    pub compiler: String,

    /// Compiler argument; `{source}` and `{output}` are substituted
    #[arg(long = "compiler-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub compiler_args: Vec<String>,

    /// Seconds allowed per compilation
    #[arg(long, default_value = "120")]
    pub timeout_secs: u64,

    /// Serialize every compilation behind one lock
    #[arg(long)]
    pub global_lock: bool,

    /// Write fixtures.json next to the fixtures
    #[arg(long)]
    pub manifest: bool,
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ParamArgs {
    /// One interface per N types
    #[arg(long)]
    pub interface_percentage: Option<NonZeroUsize>,

    /// Every Nth class is abstract
    #[arg(long)]
    pub abstract_frequency: Option<NonZeroUsize>,

    /// Every Nth non-abstract class is sealed
    #[arg(long)]
    pub sealed_frequency: Option<NonZeroUsize>,

    /// Every Nth class implements an interface
    #[arg(long)]
    pub implementation_frequency: Option<NonZeroUsize>,
}

impl ParamArgs {
    /// Applies the overrides on top of the default parameters.
    pub fn parameters(&self) -> GenerationParameters {
        let mut params = GenerationParameters::default();
        if let Some(value) = self.interface_percentage {
            params = params.with_interface_percentage(value);
        }
        if let Some(value) = self.abstract_frequency {
            params = params.with_abstract_class_frequency(value);
        }
        if let Some(value) = self.sealed_frequency {
            params = params.with_sealed_class_frequency(value);
        }
        if let Some(value) = self.implementation_frequency {
            params = params.with_interface_implementation_frequency(value);
        }
        params
    }
}

impl BuildArgs {
    /// Resolves the requested fixtures, defaulting to the canonical three.
    pub fn specs(&self) -> Result<Vec<FixtureSpec>, ConfigError> {
        if self.fixtures.is_empty() {
            return Ok(FixtureSpec::CANONICAL.to_vec());
        }
        self.fixtures
            .iter()
            .map(|name| FixtureSpec::by_name(name))
            .collect()
    }

    /// Builds the external compiler from the flags.
    pub fn command_compiler(&self) -> CommandCompiler {
        let compiler = CommandCompiler::new(self.compiler.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if self.compiler_args.is_empty() {
            compiler.args(CSC_ARGS)
        } else {
            compiler.args(self.compiler_args.iter().cloned())
        }
    }

    /// Locking scope for compilation.
    pub fn lock_scope(&self) -> LockScope {
        if self.global_lock {
            LockScope::Global
        } else {
            LockScope::PerPath
        }
    }
}
