//! Document Workflow
//!
//! This example demonstrates building a configuration with the fluent
//! builder and loading the same graph from JSON.
//!
//! Key concepts:
//! - Fluent configuration via ConfigBuilder
//! - JSON configuration via Config::from_json
//! - Unconditional jumps with change_state
//!
//! Run with: cargo run --example document_workflow

use turnstile::{Config, ConfigBuilder, StateMachine};

fn main() {
    println!("=== Document Workflow Example ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "retract", "draft")
        .build()
        .unwrap();

    let mut machine = StateMachine::new(config).unwrap();
    println!("Workflow states: {:?}", machine.states());

    machine.trigger("submit").unwrap().trigger("approve").unwrap();
    println!("After submit + approve: {}", machine.state());

    // An editor can force a document anywhere, skipping the rules.
    machine.change_state("draft").unwrap();
    println!("After forced jump: {}", machine.state());

    println!("\nUndo trail: {:?}", machine.history().past());

    // The same graph, declared as data.
    let json = r#"{
        "initial": "draft",
        "states": {
            "draft": { "transitions": { "submit": "review" } },
            "review": { "transitions": { "approve": "published", "reject": "draft" } },
            "published": { "transitions": { "retract": "draft" } }
        }
    }"#;
    let from_json = StateMachine::new(Config::from_json(json).unwrap()).unwrap();
    println!("\nLoaded from JSON, initial state: {}", from_json.state());

    println!("\n=== Example Complete ===");
}
