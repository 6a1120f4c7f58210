//! Error types for state machine operations.

use thiserror::Error;

/// Errors surfaced by [`StateMachine`](crate::core::StateMachine) operations.
///
/// All errors are synchronous and immediate. Failed operations leave the
/// machine unchanged, so a caller can always recover by trying a different
/// state or event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The configuration is missing or unusable at construction time.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// `change_state` was called with a state name absent from the
    /// configuration.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// `trigger` was called with an event that has no transition rule
    /// defined for the current state.
    #[error("No transition for event '{event}' in state '{state}'")]
    InvalidTransition { state: String, event: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_context() {
        let err = MachineError::UnknownState("limbo".to_string());
        assert_eq!(err.to_string(), "Unknown state: limbo");

        let err = MachineError::InvalidTransition {
            state: "busy".to_string(),
            event: "fly".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition for event 'fly' in state 'busy'"
        );
    }

    #[test]
    fn errors_are_comparable() {
        let a = MachineError::Config("no states".to_string());
        let b = MachineError::Config("no states".to_string());
        assert_eq!(a, b);
    }
}
