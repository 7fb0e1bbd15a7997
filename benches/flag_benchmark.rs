use atomflag::AtomicFlag;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::{Barrier, Mutex};
use std::thread;

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");

    let flag = AtomicFlag::new(false);
    group.bench_function("get", |b| b.iter(|| black_box(flag.get())));
    group.bench_function("set", |b| b.iter(|| flag.set(black_box(true))));
    group.bench_function("compare_and_set", |b| {
        b.iter(|| {
            let current = flag.get();
            black_box(flag.compare_and_set(current, !current))
        })
    });
    group.bench_function("exchange", |b| b.iter(|| black_box(flag.exchange(black_box(false)))));
    group.bench_function("try_set_true_reset", |b| {
        b.iter(|| {
            let won = flag.try_set_true();
            flag.set(false);
            black_box(won)
        })
    });

    let locked = Mutex::new(false);
    group.bench_function("std_mutex_get", |b| b.iter(|| black_box(*locked.lock().unwrap())));
    group.bench_function("std_mutex_set", |b| {
        b.iter(|| *locked.lock().unwrap() = black_box(true))
    });

    group.finish();
}

fn bench_claim_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("claim_round");
    const ROUNDS: usize = 100;

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * ROUNDS) as u64));

        group.bench_with_input(BenchmarkId::new("atomic_flag", threads), &threads, |b, &threads| {
            b.iter(|| {
                let flag = AtomicFlag::new(false);
                let barrier = Barrier::new(threads);
                let (flag, barrier) = (&flag, &barrier);

                thread::scope(|s| {
                    for t in 0..threads {
                        s.spawn(move || {
                            for _ in 0..ROUNDS {
                                barrier.wait();
                                if flag.try_set_true() {
                                    black_box(t);
                                }
                                if barrier.wait().is_leader() {
                                    flag.set(false);
                                }
                            }
                        });
                    }
                });
            })
        });

        group.bench_with_input(BenchmarkId::new("std_mutex", threads), &threads, |b, &threads| {
            b.iter(|| {
                let locked = Mutex::new(false);
                let barrier = Barrier::new(threads);
                let (locked, barrier) = (&locked, &barrier);

                thread::scope(|s| {
                    for t in 0..threads {
                        s.spawn(move || {
                            for _ in 0..ROUNDS {
                                barrier.wait();
                                if !std::mem::replace(&mut *locked.lock().unwrap(), true) {
                                    black_box(t);
                                }
                                if barrier.wait().is_leader() {
                                    *locked.lock().unwrap() = false;
                                }
                            }
                        });
                    }
                });
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_claim_rounds);
criterion_main!(benches);
