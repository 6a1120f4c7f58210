//! Core state machine types.
//!
//! This module contains the whole transition engine:
//! - Declarative state graphs via [`Config`] and [`StateDef`]
//! - The [`StateMachine`] runner with its current-state pointer
//! - Linear undo/redo via [`History`]
//!
//! Everything here is synchronous and in-memory; there are no side
//! effects beyond mutating the machine's own fields.

mod config;
mod error;
mod history;
mod machine;

pub use config::{Config, StateDef};
pub use error::MachineError;
pub use history::History;
pub use machine::StateMachine;
