// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{ThrottlePolicy, Throttled};
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttle_overhead");
    let policies = [ThrottlePolicy::Timestamp, ThrottlePolicy::Cooldown];
    let calls = 100_u64;

    for &policy in &policies {
        group.throughput(Throughput::Elements(calls));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{policy:?}")),
            &policy,
            |bencher, &policy| {
                bencher.iter(|| {
                    // 1. Lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        let wait = Duration::from_millis(10);
                        let throttled = Throttled::new(
                            |value: u64| {
                                black_box(value);
                            },
                            wait,
                            policy,
                        );

                        // 2. First call fires, the rest are dropped
                        for value in 0..calls {
                            throttled.call(value);
                        }

                        // 3. Advance time to clear the window
                        advance(wait).await;
                    });
                });
            },
        );
    }

    group.finish();
}
