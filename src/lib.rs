//! Turnstile: a small embeddable finite-state machine with undo/redo.
//!
//! Turnstile tracks a current state over a declarative map of states and
//! event-driven transitions, and keeps a linear undo/redo history of
//! every state change. It is built for application code that needs a
//! tiny state-tracking primitive: UI widgets, game entities, workflow
//! steps.
//!
//! # Core Concepts
//!
//! - **Config**: an ordered, immutable state graph ([`core::Config`])
//! - **StateMachine**: the runner holding the current state pointer
//! - **History**: two LIFO stacks giving linear undo and redo
//!
//! Everything is synchronous, single-threaded, and in-memory. A machine
//! instance is self-contained; wrap it in a lock if a concurrent host
//! needs to share one.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{fsm_config, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: "normal",
//!     "normal" => { "study" => "busy" },
//!     "busy" => { "get_tired" => "sleeping", "get_hungry" => "hungry" },
//!     "hungry" => { "eat" => "normal" },
//!     "sleeping" => { "get_hungry" => "hungry", "get_up" => "normal" },
//! };
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("study").unwrap();
//! assert_eq!(machine.state(), "busy");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "normal");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "busy");
//!
//! assert_eq!(machine.states_handling("get_hungry"), ["busy", "sleeping"]);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Config, History, MachineError, StateDef, StateMachine};

// Macro support. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use indexmap::IndexMap;
}
