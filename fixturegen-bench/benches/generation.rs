//! Source generation benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fixturegen_codegen::{CSharpEmitter, Generator, generate_fixture};
use fixturegen_core::{FixtureSpec, GenerationParameters};
use std::hint::black_box;

fn benchmark_generate_source(c: &mut Criterion) {
    let params = GenerationParameters::default();
    let mut group = c.benchmark_group("generate_source");

    for spec in FixtureSpec::CANONICAL {
        group.throughput(Throughput::Elements(spec.type_count.get() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(spec.short_name()),
            &spec,
            |b, spec| b.iter(|| generate_fixture(black_box(spec), &params)),
        );
    }

    group.finish();
}

fn benchmark_ir_and_render(c: &mut Criterion) {
    let params = GenerationParameters::default();
    let spec = FixtureSpec::LARGE;
    let generator = Generator::new(&params);

    c.bench_function("program_ir_large", |b| {
        b.iter(|| generator.program(black_box(&spec.name), spec.type_count))
    });

    let ir = generator.program(&spec.name, spec.type_count);
    c.bench_function("render_csharp_large", |b| {
        b.iter(|| CSharpEmitter::new(black_box(&ir)).emit())
    });
}

criterion_group!(benches, benchmark_generate_source, benchmark_ir_and_render);
criterion_main!(benches);
