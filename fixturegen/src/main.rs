//! `fixturegen` command-line entry point.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{BuildArgs, Cli, Command};
use fixturegen::prelude::*;
use std::fmt::Write as _;
use std::num::NonZeroUsize;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let printed = match cli.command {
        Some(Command::Print {
            name,
            types,
            params,
        }) => Some(print_source(&name, types, params.parameters())),
        Some(Command::Report { iterations, params }) => {
            Some(Ok(report(iterations, &params.parameters())))
        }
        None => None,
    };
    match printed {
        Some(Ok(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Some(Err(e)) => {
            eprintln!("Error generating test assemblies: {e:#}");
            return ExitCode::from(1);
        }
        None => {}
    }

    let Some(output_dir) = cli.output_dir else {
        eprintln!("Usage: fixturegen <OUTPUT_DIR>");
        return ExitCode::from(1);
    };

    println!("Generating test assemblies in: {}", output_dir.display());

    match generate(&output_dir, &cli.build, cli.params.parameters()) {
        Ok(()) => {
            println!("Test assembly generation completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating test assemblies: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn print_source(
    name: &str,
    types: NonZeroUsize,
    params: GenerationParameters,
) -> anyhow::Result<String> {
    let spec = FixtureSpec::named(name, types.get())?;
    Ok(generate_fixture(&spec, &params))
}

fn report(iterations: NonZeroUsize, params: &GenerationParameters) -> String {
    let mut out = String::new();
    for spec in FixtureSpec::CANONICAL {
        let report = measure_generation(&spec, params, iterations);
        let _ = writeln!(
            out,
            "{:<22} {:>5} types {:>9} bytes  fastest {:>10.3?}  mean {:>10.3?}  {:>12.0} types/s",
            report.fixture,
            report.type_count,
            report.source_bytes,
            report.fastest,
            report.mean(),
            report.types_per_second(),
        );
    }
    out
}

fn generate(
    output_dir: &Path,
    args: &BuildArgs,
    params: GenerationParameters,
) -> anyhow::Result<()> {
    let specs = args.specs()?;
    if args.emit_source {
        build(SourceEmitter::new(), output_dir, args, &specs, params)
    } else {
        build(args.command_compiler(), output_dir, args, &specs, params)
    }
}

fn build<C: Compiler>(
    compiler: C,
    output_dir: &Path,
    args: &BuildArgs,
    specs: &[FixtureSpec],
    params: GenerationParameters,
) -> anyhow::Result<()> {
    let builder =
        FixtureBuilder::with_lock_scope(compiler, args.lock_scope()).with_parameters(params);

    let built = if args.parallel {
        builder.build_many_parallel(specs, output_dir)?
    } else {
        builder.build_many(specs, output_dir)?
    };

    for fixture in &built {
        tracing::info!(
            fixture = %fixture.spec.name,
            interfaces = fixture.split.interface_count,
            classes = fixture.split.class_count,
            warnings = fixture.warnings.len(),
            "built"
        );
    }

    if args.manifest {
        write_manifest(output_dir, params, &built).context("failed to write manifest")?;
    }

    Ok(())
}
