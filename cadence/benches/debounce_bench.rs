// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::Debounced;
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_burst");
    let bursts = [1_u64, 10, 100];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(
            BenchmarkId::from_parameter(burst),
            &burst,
            |bencher, &burst| {
                bencher.iter(|| {
                    // 1. Lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        let fired = Arc::new(AtomicU64::new(0));
                        let counter = Arc::clone(&fired);
                        let wait = Duration::from_millis(10);

                        // 2. Every call reschedules the pending one
                        let debounced = Debounced::new(
                            move |value: u64| {
                                counter.fetch_add(black_box(value), Ordering::Relaxed);
                            },
                            wait,
                        );
                        for value in 0..burst {
                            debounced.call(value);
                        }

                        // 3. Let the trailing call fire
                        advance(wait * 2).await;
                        black_box(fired.load(Ordering::Relaxed));
                    });
                });
            },
        );
    }

    group.finish();
}
