//! Benchmark for stack-safe iteration: `Trampoline` and `tail_rec_m`.
//!
//! Compares the trampolined and monadic loop encodings against a plain
//! iterative baseline at increasing depths.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindling::control::Trampoline;
use kindling::typeclass::{Identity, Monad};
use std::hint::black_box;
use std::ops::ControlFlow;

fn sum_trampoline(number: i64) -> Trampoline<i64> {
    sum_helper(number, 0)
}

fn sum_helper(number: i64, accumulator: i64) -> Trampoline<i64> {
    if number == 0 {
        Trampoline::done(accumulator)
    } else {
        Trampoline::defer(move || sum_helper(number - 1, accumulator + number))
    }
}

fn sum_tail_rec_identity(number: i64) -> i64 {
    let Identity(total) = <Identity<(i64, i64)> as Monad>::tail_rec_m((number, 0), |(n, total)| {
        if n == 0 {
            Identity(ControlFlow::Break(total))
        } else {
            Identity(ControlFlow::Continue((n - 1, total + n)))
        }
    });
    total
}

fn sum_tail_rec_option(number: i64) -> Option<i64> {
    <Option<(i64, i64)> as Monad>::tail_rec_m((number, 0), |(n, total)| {
        if n == 0 {
            Some(ControlFlow::Break(total))
        } else {
            Some(ControlFlow::Continue((n - 1, total + n)))
        }
    })
}

fn sum_iterative(number: i64) -> i64 {
    (0..=number).sum()
}

fn benchmark_sum_encodings(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sum_encodings");

    for depth in [100_i64, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("Trampoline", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_trampoline(black_box(depth)).run()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tail_rec_m_identity", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_tail_rec_identity(black_box(depth))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tail_rec_m_option", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_tail_rec_option(black_box(depth))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Iterative", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_iterative(black_box(depth))));
            },
        );
    }

    group.finish();
}

fn benchmark_trampoline_binds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("trampoline_binds");

    // Deferral alone versus deferral with a bind at every step.
    fn countdown(n: i64) -> Trampoline<i64> {
        if n == 0 {
            Trampoline::done(0)
        } else {
            Trampoline::defer(move || countdown(n - 1))
        }
    }

    fn countdown_bound(n: i64) -> Trampoline<i64> {
        if n == 0 {
            Trampoline::done(0)
        } else {
            Trampoline::defer(move || countdown_bound(n - 1)).flat_map(Trampoline::done)
        }
    }

    let depth = 10_000_i64;

    group.bench_function("defer_only", |bencher| {
        bencher.iter(|| black_box(countdown(black_box(depth)).run()));
    });

    group.bench_function("defer_and_bind", |bencher| {
        bencher.iter(|| black_box(countdown_bound(black_box(depth)).run()));
    });

    group.finish();
}

fn benchmark_tail_rec_short_loops(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tail_rec_short_loops");

    // Per-step overhead dominates at small depths.
    for depth in [1_i64, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("tail_rec_m_identity", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_tail_rec_identity(black_box(depth))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Trampoline", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| black_box(sum_trampoline(black_box(depth)).run()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sum_encodings,
    benchmark_trampoline_binds,
    benchmark_tail_rec_short_loops
);

criterion_main!(benches);
