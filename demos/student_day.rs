//! Student Day
//!
//! This example demonstrates event-driven transitions with undo/redo.
//!
//! Key concepts:
//! - Declaring a state graph with the fsm_config! macro
//! - Triggering events and handling invalid transitions
//! - Walking the history backwards and forwards
//!
//! Run with: cargo run --example student_day

use turnstile::{fsm_config, StateMachine};

fn main() {
    println!("=== Student Day Example ===\n");

    let config = fsm_config! {
        initial: "normal",
        "normal" => { "study" => "busy" },
        "busy" => { "get_tired" => "sleeping", "get_hungry" => "hungry" },
        "hungry" => { "eat" => "normal" },
        "sleeping" => { "get_hungry" => "hungry", "get_up" => "normal" },
    };

    let mut machine = StateMachine::new(config).unwrap();
    println!("Initial state: {}", machine.state());

    machine.trigger("study").unwrap();
    println!("After 'study': {}", machine.state());

    machine.trigger("get_tired").unwrap();
    println!("After 'get_tired': {}", machine.state());

    // An event the current state does not handle fails loudly.
    if let Err(err) = machine.trigger("study") {
        println!("Trigger rejected: {err}");
    }

    println!("\nUndoing twice...");
    machine.undo();
    machine.undo();
    println!("Back to: {}", machine.state());

    println!("Redoing once...");
    machine.redo();
    println!("Forward to: {}", machine.state());

    println!(
        "\nStates handling 'get_hungry': {:?}",
        machine.states_handling("get_hungry")
    );

    println!("\n=== Example Complete ===");
}
