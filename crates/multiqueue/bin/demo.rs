//! # MultiQueue Demo
//!
//! Splits a character stream across two sub-queues (`'c'` to queue 0,
//! everything else to queue 1), then:
//!
//! 1. takes one value straight out of queue 1,
//! 2. drains queue 0 on its own,
//! 3. drains whatever is left through the global view.
//!
//! Before each removal it prints `[size] value`, where `size` is the length of
//! the view being drained.
//!
//! ## Running
//!
//! ```bash
//! # Default input "ccccddcdcdccdd"
//! cargo run -p multiqueue --features demo --bin multiqueue-demo
//!
//! # Custom input, with purge events logged
//! RUST_LOG=multiqueue=trace cargo run -p multiqueue --features demo --bin multiqueue-demo -- cdcdxc
//! ```

use multiqueue::{Config, MultiQueue};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_INPUT: &str = "ccccddcdcdccdd";

/// Initialize tracing from `RUST_LOG` (default: info) on stderr, so the
/// demo's own output on stdout stays clean.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}

fn route(c: char) -> usize {
    if c == 'c' {
        0
    } else {
        1
    }
}

fn main() {
    init_tracing();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());

    let mut queue: MultiQueue<char, 2> =
        MultiQueue::with_config(Config::default().with_metrics(true));
    for c in input.chars() {
        queue.enqueue(route(c), c);
    }
    info!(
        total = queue.len(),
        queue0 = queue.len_of(0),
        queue1 = queue.len_of(1),
        "loaded input"
    );

    if !queue.is_empty_at(1) {
        println!("[{}] {}", queue.len_of(1), queue.front_of(1));
        queue.dequeue_from(1);
    }

    while !queue.is_empty_at(0) {
        println!("[{}] {}", queue.len_of(0), queue.front_of(0));
        queue.dequeue_from(0);
    }

    while !queue.is_empty() {
        println!("[{}] {}", queue.len(), queue.front());
        queue.dequeue();
    }

    let metrics = queue.metrics();
    info!(
        enqueued = metrics.enqueued,
        dequeued_global = metrics.dequeued_global,
        dequeued_direct = metrics.dequeued_direct,
        purged = metrics.purged,
        "drained"
    );
}
