//! Criterion benchmarks for nlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nlog::core::template::render;
use nlog::prelude::*;
use std::sync::Arc;

/// Sink that discards everything, isolating logger overhead
fn null_sink(_: &Record) -> nlog::Result<()> {
    Ok(())
}

// ============================================================================
// Level Gate Benchmarks
// ============================================================================

fn bench_filtered_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(Severity::Error)
        .sink(null_sink)
        .build();

    group.bench_function("debug_plain", |b| {
        b.iter(|| logger.debug(black_box("bench"), black_box("Debug message")));
    });

    let args = [Arg::from(42), Arg::from("payload")];
    group.bench_function("infof_with_args", |b| {
        b.iter(|| logger.infof(black_box("bench"), black_box("n=%d s=%s"), black_box(&args)));
    });

    group.bench_function("get_level", |b| {
        b.iter(|| black_box(logger.get_level()));
    });

    group.finish();
}

// ============================================================================
// Admitted Emission Benchmarks
// ============================================================================

fn bench_admitted_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("admitted");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(Severity::Debug)
        .sink(null_sink)
        .build();

    group.bench_function("info_plain", |b| {
        b.iter(|| logger.info(black_box("bench"), black_box("Info message")));
    });

    group.bench_function("errorf_two_args", |b| {
        b.iter(|| {
            logger.errorf(
                black_box("bench"),
                black_box("failed after %d ms: %s"),
                &[Arg::from(120), Arg::from("timeout")],
            )
        });
    });

    let memory = Arc::new(MemorySink::with_capacity(1024));
    let captured = Logger::builder().sink_arc(memory).build();
    group.bench_function("memory_sink", |b| {
        b.iter(|| captured.warn(black_box("bench"), black_box("Warn message")));
    });

    group.finish();
}

// ============================================================================
// Template Benchmarks
// ============================================================================

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template");

    let args = [
        Arg::from("alice"),
        Arg::from(42),
        Arg::from(3.14159),
        Arg::from(255u32),
    ];

    group.bench_function("mixed_conversions", |b| {
        b.iter(|| render(black_box("user=%s id=%d ratio=%.2f mask=%x"), black_box(&args)));
    });

    group.bench_function("no_placeholders", |b| {
        b.iter(|| render(black_box("a plain message with no conversions at all"), &[]));
    });

    group.finish();
}

// ============================================================================
// Async Sink Benchmarks
// ============================================================================

fn bench_async_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_sink");
    group.throughput(Throughput::Elements(1));

    let queue = AsyncSink::builder(Arc::new(null_sink))
        .capacity(10_000)
        .overflow_policy(OverflowPolicy::Block)
        .build()
        .expect("async sink");
    let logger = Logger::builder().sink(queue).build();

    group.bench_function("infof_enqueue", |b| {
        b.iter(|| logger.infof(black_box("bench"), black_box("seq %d"), &[Arg::from(1)]));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filtered_calls,
    bench_admitted_calls,
    bench_template,
    bench_async_sink
);
criterion_main!(benches);
