// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cadence demo - debounce and throttle wrappers in action
//!
//! This binary replays:
//! - Three buttons forwarding input to a plain, a debounced and a throttled printer
//! - A fast repeating trigger feeding a trailing and an immediate debounce
//! - Two repeating triggers feeding the timestamp and cooldown throttles
//! - The higher-order function idioms
//!
//! Set `CADENCE_LOG=debug` to see every reschedule and dropped call.
//!
//! Run with: `cargo run -p cadence-demo`

mod buttons;
mod idioms;
mod scenarios;

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CADENCE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    println!("\nCadence demo");
    println!("============\n");

    buttons::run().await?;
    scenarios::debounce_under_interval().await?;
    scenarios::immediate_debounce_under_interval().await?;
    scenarios::throttles_under_interval().await?;
    idioms::run()?;

    println!("\nDone");
    Ok(())
}
