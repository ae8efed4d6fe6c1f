//! Criterion benchmarks for fanlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fanlog::prelude::*;
use std::io;
use std::sync::Arc;

struct NullPublisher;

impl Publish for NullPublisher {
    fn publish(&mut self, _topic: &str, _body: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

fn null_device(pool: &Arc<BufferPool>) -> Device {
    Device::Queue(QueueDevice::with_publisher(
        "bench",
        "logs",
        Box::new(NullPublisher),
        Arc::clone(pool),
    ))
}

fn bench_logger(thresholds: &[Severity]) -> Logger {
    let clock = Arc::new(ClockCache::new());
    let pool = Arc::new(BufferPool::new());
    let logger = Logger::new(Formatter::Default, clock, Arc::clone(&pool));
    for threshold in thresholds {
        logger.push_writer(Writer::new(*threshold, null_device(&pool)));
    }
    logger
}

// ============================================================================
// Suppression Benchmarks
// ============================================================================

fn bench_suppressed_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_dispatch");
    group.throughput(Throughput::Elements(1));

    let disabled = bench_logger(&[Severity::Disable]);
    group.bench_function("disabled_writer", |b| {
        b.iter(|| {
            disabled.info(format_args!("{}", black_box("Suppressed message")));
        });
    });

    let strict = bench_logger(&[Severity::Error]);
    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            strict.info(format_args!("{}", black_box("Suppressed message")));
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let single = bench_logger(&[Severity::Debug]);
    group.bench_function("single_writer", |b| {
        b.iter(|| {
            single.info(format_args!("{}", black_box("Info message")));
        });
    });

    let four = bench_logger(&[
        Severity::Debug,
        Severity::Debug,
        Severity::Debug,
        Severity::Debug,
    ]);
    group.bench_function("fan_out_4", |b| {
        b.iter(|| {
            four.info(format_args!("{}", black_box("Info message")));
        });
    });

    let mixed = bench_logger(&[Severity::Debug, Severity::Warn, Severity::Error]);
    group.bench_function("mixed_thresholds", |b| {
        b.iter(|| {
            mixed.info(format_args!("{}", black_box("Info message")));
        });
    });

    group.finish();
}

// ============================================================================
// Record Formatting Benchmarks
// ============================================================================

fn bench_record_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_format");
    group.throughput(Throughput::Elements(1));

    let clock = ClockCache::new();
    let pool = BufferPool::new();

    group.bench_function("standard", |b| {
        b.iter(|| {
            let record = Formatter::Default.format(
                Severity::Info,
                std::panic::Location::caller(),
                format_args!("{}", black_box("Info message")),
                &clock,
                &pool,
            );
            pool.put(record);
        });
    });

    group.bench_function("simple", |b| {
        b.iter(|| {
            let record = Formatter::Simple.format(
                Severity::Info,
                std::panic::Location::caller(),
                format_args!("{}", black_box("Info message")),
                &clock,
                &pool,
            );
            pool.put(record);
        });
    });

    group.finish();
}

// ============================================================================
// Buffer Pool Benchmarks
// ============================================================================

fn bench_buffer_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_pool");
    group.throughput(Throughput::Elements(1));

    let pool = BufferPool::new();

    group.bench_function("get_put", |b| {
        b.iter(|| {
            let mut buf = pool.get();
            buf.extend_from_slice(black_box(b"one pooled record"));
            pool.put(buf);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_suppressed_dispatch,
    bench_dispatch,
    bench_record_format,
    bench_buffer_pool
);
criterion_main!(benches);
