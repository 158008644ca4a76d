use chrono::Local;
use criterion::{Criterion, criterion_group, criterion_main};
use melodylog::fmt::{format, prefix, rule, strip_ansi, wrap};
use melodylog::{ConsoleLogger, Severity};
use std::hint::black_box;
use std::io;

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    let short = "Application started successfully";
    group.bench_function("short", |b| {
        b.iter(|| wrap(black_box(short), black_box(140)));
    });

    let long = "the quick brown fox jumps over the lazy dog ".repeat(40);
    group.bench_function("long", |b| {
        b.iter(|| wrap(black_box(&long), black_box(80)));
    });

    group.finish();
}

fn bench_prefix(c: &mut Criterion) {
    let now = Local::now();
    c.bench_function("prefix", |b| {
        b.iter(|| prefix(black_box(Severity::Warning), black_box(&now)));
    });
}

fn bench_line(c: &mut Criterion) {
    let now = Local::now();
    let msg = "Connection to 10.0.0.7 restored after 3 retries, resuming queue drain";
    c.bench_function("format::line", |b| {
        b.iter(|| format::line(black_box(Severity::Info), black_box(msg), &now, 140));
    });
}

fn bench_rule_and_strip(c: &mut Criterion) {
    let rendered = rule(140);
    c.bench_function("strip_ansi", |b| {
        b.iter(|| strip_ansi(black_box(&rendered)));
    });
}

fn bench_emit(c: &mut Criterion) {
    let logger = ConsoleLogger::builder().writer(io::sink()).build();
    c.bench_function("ConsoleLogger::emit", |b| {
        b.iter(|| logger.emit(black_box(Severity::Debug), black_box("payload accepted")));
    });
}

criterion_group!(
    benches,
    bench_wrap,
    bench_prefix,
    bench_line,
    bench_rule_and_strip,
    bench_emit
);
criterion_main!(benches);
