//! Simulated Button Session
//!
//! This example drives an EventButton from a scripted sample sequence and
//! a fake clock, the way a firmware polling loop would drive it from a
//! real input line.
//!
//! Key concepts:
//! - Press reported on the first high sample, confirmed after the interval
//! - Contact chatter suppressed by the debounce countdown
//! - Release trusted immediately, no countdown on the way down
//!
//! Run with: cargo run --example simulated_button

use std::cell::Cell;
use std::rc::Rc;
use tactile::builder::EventButtonBuilder;
use tactile::core::State;

fn main() {
    println!("=== Simulated Button Session ===\n");

    let now = Rc::new(Cell::new(0u64));
    let presses = Rc::new(Cell::new(0u32));

    let clock = Rc::clone(&now);
    let count = Rc::clone(&presses);
    let mut button = EventButtonBuilder::new()
        .interval(3)
        .notify(move || {
            count.set(count.get() + 1);
            println!("  >> press reported");
        })
        .clock(move || clock.get())
        .build()
        .expect("all fields configured");

    // A noisy press, a hold, then a clean release.
    let script = [
        (0, true),
        (1, false), // chatter
        (2, true),
        (3, true),
        (4, false), // chatter
        (5, true),
        (6, true),
        (7, true),
        (8, false), // release
    ];

    for (t, level) in script {
        now.set(t);
        button.update(level);
        println!(
            "t={t}: sample={} state={}",
            if level { "high" } else { "low " },
            button.state().name()
        );
    }

    println!("\nTotal presses reported: {}", presses.get());
    println!("One callback for the whole noisy press, none for the release.");

    println!("\n=== Example Complete ===");
}
