//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for declaring state
//! graphs with minimal boilerplate. Both produce a plain
//! [`Config`](crate::core::Config); validation still happens once, at
//! [`StateMachine::new`](crate::core::StateMachine::new).

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Config, StateDef};
use indexmap::IndexMap;

/// Fluent builder for [`Config`].
///
/// States appear in the built configuration in the order they are first
/// mentioned, whether declared explicitly with [`state`](Self::state) or
/// implicitly as a transition endpoint.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::ConfigBuilder;
/// use turnstile::core::StateMachine;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .build()
///     .unwrap();
///
/// let machine = StateMachine::new(config).unwrap();
/// assert_eq!(machine.state(), "draft");
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required). The state itself must still be
    /// declared, explicitly or as a transition endpoint, before
    /// [`build`](Self::build).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state with no outgoing transitions (a dead end unless
    /// transitions are added later).
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Add a transition rule. Both endpoints are declared implicitly if
    /// they have not been mentioned yet.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let to = to.into();
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.clone());
        self.states.entry(to).or_default();
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Config, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if !self.states.contains_key(&initial) {
            return Err(BuildError::UnknownInitialState(initial));
        }
        Ok(Config::new(initial, self.states))
    }
}

/// Build a linear workflow: each state transitions to the next on
/// `event`, and the first state is initial.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::linear;
/// use turnstile::core::StateMachine;
///
/// let config = linear(["todo", "doing", "done"], "advance").unwrap();
/// let mut machine = StateMachine::new(config).unwrap();
///
/// machine.trigger("advance").unwrap().trigger("advance").unwrap();
/// assert_eq!(machine.state(), "done");
/// assert!(machine.trigger("advance").is_err());
/// ```
pub fn linear<'a, I>(states: I, event: &str) -> Result<Config, BuildError>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = states.into_iter().collect();
    let first = names.first().copied().ok_or(BuildError::NoStates)?;

    let mut builder = ConfigBuilder::new().state(first).initial(first);
    for pair in names.windows(2) {
        builder = builder.transition(pair[0], event, pair[1]);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoStates)));

        let result = ConfigBuilder::new().state("alone").build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));

        let result = ConfigBuilder::new().state("real").initial("ghost").build();
        assert!(matches!(result, Err(BuildError::UnknownInitialState(_))));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("normal")
            .transition("normal", "study", "busy")
            .transition("busy", "get_tired", "sleeping")
            .build()
            .unwrap();

        assert_eq!(config.initial(), "normal");
        assert_eq!(
            config.state_names().collect::<Vec<_>>(),
            ["normal", "busy", "sleeping"]
        );
        assert_eq!(config.state("normal").unwrap().target("study"), Some("busy"));
    }

    #[test]
    fn transition_endpoints_are_declared_implicitly() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .build()
            .unwrap();

        assert!(config.contains_state("b"));
        assert!(config.state("b").unwrap().transitions.is_empty());
    }

    #[test]
    fn states_keep_first_mention_order() {
        let config = ConfigBuilder::new()
            .initial("start")
            .transition("start", "jump", "end")
            .transition("middle", "jump", "end")
            .build()
            .unwrap();

        assert_eq!(
            config.state_names().collect::<Vec<_>>(),
            ["start", "end", "middle"]
        );
    }

    #[test]
    fn linear_chains_states_in_order() {
        let config = linear(["a", "b", "c"], "next").unwrap();
        assert_eq!(config.initial(), "a");
        assert_eq!(config.state("a").unwrap().target("next"), Some("b"));
        assert_eq!(config.state("b").unwrap().target("next"), Some("c"));
        assert!(config.state("c").unwrap().transitions.is_empty());
    }

    #[test]
    fn linear_rejects_empty_input() {
        let result = linear([], "next");
        assert!(matches!(result, Err(BuildError::NoStates)));
    }
}
