//! Traffic Light State Machine
//!
//! This example demonstrates the generic table-driven engine on its own,
//! without the timer or button layers.
//!
//! Key concepts:
//! - Cyclic state transitions declared as an ordered constant table
//! - Entry behaviors dispatched on the destination state
//! - The single-slot pending event: one enqueue, one tick
//!
//! Run with: cargo run --example traffic_light

use tactile::core::{Behavior, StateMachine, Transition};
use tactile::{event_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

event_enum! {
    enum Signal {
        Advance,
    }
}

const TRANSITIONS: &[Transition<TrafficLight, Signal>] = &[
    Transition { from: TrafficLight::Red, on: Signal::Advance, to: TrafficLight::Green },
    Transition { from: TrafficLight::Green, on: Signal::Advance, to: TrafficLight::Yellow },
    Transition { from: TrafficLight::Yellow, on: Signal::Advance, to: TrafficLight::Red },
];

fn announce(machine: &mut StateMachine<TrafficLight, Signal>, log: &mut Vec<String>) {
    use tactile::core::State;
    log.push(format!("entered {}", machine.state().name()));
}

const BEHAVIORS: &[Behavior<TrafficLight, Signal, Vec<String>>] = &[
    Behavior { state: TrafficLight::Red, on_entry: announce },
    Behavior { state: TrafficLight::Green, on_entry: announce },
    Behavior { state: TrafficLight::Yellow, on_entry: announce },
];

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachine::new(TrafficLight::Red);
    let mut log = Vec::new();

    println!("Initial state: {:?}\n", machine.state());

    for _ in 0..6 {
        machine.enqueue(Signal::Advance);
        machine.tick(TRANSITIONS, BEHAVIORS, &mut log);
    }

    println!("Transition log:");
    for line in &log {
        println!("  {line}");
    }

    println!("\nBack at: {:?}", machine.state());
    println!("The cycle repeats: Red -> Green -> Yellow -> Red -> ...");

    println!("\n=== Example Complete ===");
}
