// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrappers fed by a repeating trigger every 10ms.
//!
//! Each scenario returns the offsets (ms) at which the target ran.

use cadence::{Debounced, Interval, Throttled};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::info;

const TRIGGER_PERIOD: Duration = Duration::from_millis(10);
const WAIT: Duration = Duration::from_millis(1500);
const TRIGGER_RUN: Duration = Duration::from_millis(505);

type Args = (&'static str, &'static str, &'static str);

/// Prints each execution and remembers when it happened.
struct Announcer {
    origin: Instant,
    fired_at: Arc<Mutex<Vec<u64>>>,
}

impl Announcer {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
            fired_at: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn target(&self) -> impl Fn(Args) + Send + Sync + 'static {
        let origin = self.origin;
        let fired_at = Arc::clone(&self.fired_at);
        move |(a, b, c)| {
            let at_ms = u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX);
            println!("[+{at_ms:>5}ms]: fn executes! args = {a}, {b}, {c}");
            fired_at.lock().push(at_ms);
        }
    }

    fn fired_at(&self) -> Vec<u64> {
        self.fired_at.lock().clone()
    }
}

/// Trailing debounce: nothing fires while the trigger runs, once after it stops.
pub async fn debounce_under_interval() -> anyhow::Result<Vec<u64>> {
    println!("-- trailing debounce of {WAIT:?}, triggered every {TRIGGER_PERIOD:?}");
    let announcer = Announcer::new();
    let debounced = Debounced::try_new(announcer.target(), WAIT)?;
    let trigger = Interval::try_start(
        TRIGGER_PERIOD,
        debounced.clone(),
        ("arg1", "arg2", "arg3"),
    )?;

    sleep(TRIGGER_RUN).await;
    trigger.cancel();
    info!(ticks = trigger.ticks(), "trigger cancelled");

    sleep(WAIT + Duration::from_millis(100)).await;
    info!(pending = debounced.is_pending(), "trailing window elapsed");
    println!();
    Ok(announcer.fired_at())
}

/// Immediate debounce: fires on the first trigger and after the last one.
pub async fn immediate_debounce_under_interval() -> anyhow::Result<Vec<u64>> {
    println!("-- immediate debounce of {WAIT:?}, triggered every {TRIGGER_PERIOD:?}");
    let announcer = Announcer::new();
    let debounced = Debounced::immediate(announcer.target(), WAIT);
    let trigger = Interval::try_start(
        TRIGGER_PERIOD,
        debounced.clone(),
        ("arg1", "arg2", "arg3"),
    )?;

    sleep(TRIGGER_RUN).await;
    trigger.cancel();
    info!(ticks = trigger.ticks(), "trigger cancelled");

    sleep(WAIT + Duration::from_millis(100)).await;
    info!(pending = debounced.is_pending(), "trailing window elapsed");
    println!();
    Ok(announcer.fired_at())
}

/// Both throttle policies side by side.
pub async fn throttles_under_interval() -> anyhow::Result<(Vec<u64>, Vec<u64>)> {
    println!("-- timestamp and cooldown throttles of {WAIT:?}, triggered every {TRIGGER_PERIOD:?}");
    let by_timestamp = Announcer::new();
    let by_cooldown = Announcer::new();

    let first = Interval::try_start(
        TRIGGER_PERIOD,
        Throttled::timestamp(by_timestamp.target(), WAIT),
        ("arg1", "arg2", "arg3"),
    )?;
    let second = Interval::try_start(
        TRIGGER_PERIOD,
        Throttled::cooldown(by_cooldown.target(), WAIT),
        ("arg4", "arg5", "arg6"),
    )?;

    sleep(Duration::from_millis(3200)).await;
    first.cancel();
    second.cancel();
    info!(
        timestamp_ticks = first.ticks(),
        cooldown_ticks = second.ticks(),
        "triggers cancelled"
    );

    println!();
    Ok((by_timestamp.fired_at(), by_cooldown.fired_at()))
}
