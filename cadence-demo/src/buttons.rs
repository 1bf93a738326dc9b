// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::prelude::*;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

const WAIT: Duration = Duration::from_millis(500);

fn print_output(input: String) {
    println!("[output] {input}");
}

/// Three buttons sharing one printer: plain, debounced and throttled.
pub struct ButtonPanel {
    debounced: Debounced<String, fn(String)>,
    throttled: Throttled<String, fn(String)>,
}

impl ButtonPanel {
    pub fn new() -> Self {
        info!("debounce wrapper created");
        let debounced = debounce(print_output as fn(String), WAIT);
        info!("throttle wrapper created");
        let throttled = throttle(print_output as fn(String), WAIT);

        Self {
            debounced,
            throttled,
        }
    }

    pub fn on_btn1_click(&self, input: &str) {
        print_output(input.to_string());
    }

    pub fn on_btn2_click(&self, input: &str) {
        self.debounced.call(input.to_string());
    }

    pub fn on_btn3_click(&self, input: &str) {
        self.throttled.call(input.to_string());
    }
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Type "hello" into each button, one keystroke every 50ms.
pub async fn run() -> anyhow::Result<()> {
    let panel = ButtonPanel::new();
    let word = "hello";
    let prefixes: Vec<&str> = word
        .char_indices()
        .map(|(idx, c)| &word[..idx + c.len_utf8()])
        .collect();

    println!("-- button 1: plain");
    for prefix in &prefixes {
        panel.on_btn1_click(prefix);
        sleep(Duration::from_millis(50)).await;
    }

    println!("-- button 2: debounced by {WAIT:?}");
    for prefix in &prefixes {
        panel.on_btn2_click(prefix);
        sleep(Duration::from_millis(50)).await;
    }
    sleep(WAIT * 2).await;

    println!("-- button 3: throttled to one per {WAIT:?}");
    for prefix in &prefixes {
        panel.on_btn3_click(prefix);
        sleep(Duration::from_millis(50)).await;
    }
    sleep(WAIT).await;

    println!();
    Ok(())
}
