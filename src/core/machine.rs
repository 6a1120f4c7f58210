//! The state machine itself: a current-state pointer over an immutable
//! [`Config`], with linear undo/redo of every state change.

use crate::core::config::Config;
use crate::core::error::MachineError;
use crate::core::history::History;

/// A finite-state machine with event-driven transitions and undo/redo.
///
/// The machine owns its configuration for its whole lifetime; only the
/// current state and the history stacks mutate. Every successful forward
/// movement ([`trigger`](StateMachine::trigger) or
/// [`change_state`](StateMachine::change_state)) records the state being
/// left and invalidates redo. Failed operations leave the machine
/// exactly as it was.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initial": "draft",
///     "states": {
///         "draft": { "transitions": { "submit": "review" } },
///         "review": { "transitions": { "approve": "published", "reject": "draft" } },
///         "published": {}
///     }
/// }"#).unwrap();
///
/// machine.trigger("submit").unwrap().trigger("approve").unwrap();
/// assert_eq!(machine.state(), "published");
///
/// machine.undo();
/// assert_eq!(machine.state(), "review");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at the configuration's initial state.
    ///
    /// Fails with [`MachineError::Config`] when the configuration is
    /// unusable: it defines no states, or names an initial state that is
    /// not in the graph. A machine is never constructed in an invalid
    /// state, so every later operation can rely on `current` being a
    /// configured state name.
    pub fn new(config: Config) -> Result<Self, MachineError> {
        if config.is_empty() {
            return Err(MachineError::Config("no states defined".to_string()));
        }
        if !config.contains_state(config.initial()) {
            return Err(MachineError::Config(format!(
                "initial state '{}' is not defined",
                config.initial()
            )));
        }
        let current = config.initial().to_string();
        Ok(Self {
            config,
            current,
            history: History::new(),
        })
    }

    /// Parse a JSON configuration and construct a machine from it.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Self::new(Config::from_json(json)?)
    }

    /// The active state name.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The configured initial state name.
    pub fn initial(&self) -> &str {
        self.config.initial()
    }

    /// The immutable state graph this machine runs over.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump directly to `target`, bypassing transition rules.
    ///
    /// Fails with [`MachineError::UnknownState`] when `target` is not a
    /// configured state; the current state is unchanged on failure. On
    /// success the previous state is recorded for undo and any pending
    /// redo entries are dropped.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.contains_state(target) {
            return Err(MachineError::UnknownState(target.to_string()));
        }
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.record(previous);
        Ok(())
    }

    /// Follow the current state's transition rule for `event`.
    ///
    /// Fails with [`MachineError::InvalidTransition`] when the current
    /// state has no rule for `event`. A current state missing from the
    /// graph entirely is treated the same way, since it likewise defines
    /// no transition for the event. Returns `&mut Self` so successful
    /// triggers chain:
    ///
    /// ```rust
    /// # use turnstile::core::StateMachine;
    /// # let mut machine = StateMachine::from_json(r#"{
    /// #     "initial": "a",
    /// #     "states": {
    /// #         "a": { "transitions": { "go": "b" } },
    /// #         "b": { "transitions": { "go": "c" } },
    /// #         "c": {}
    /// #     }
    /// # }"#).unwrap();
    /// machine.trigger("go")?.trigger("go")?;
    /// assert_eq!(machine.state(), "c");
    /// # Ok::<(), turnstile::core::MachineError>(())
    /// ```
    pub fn trigger(&mut self, event: &str) -> Result<&mut Self, MachineError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|def| def.target(event))
            .ok_or_else(|| MachineError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        let previous = std::mem::replace(&mut self.current, target);
        self.history.record(previous);
        Ok(self)
    }

    /// Return to the initial state and drop all history. Never fails.
    pub fn reset(&mut self) {
        self.current = self.config.initial().to_string();
        self.history.clear();
    }

    /// All configured state names, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.state_names().collect()
    }

    /// The state names whose transition table handles `event`, in
    /// declaration order. An event defined nowhere yields an empty list.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(name, _)| name)
            .collect()
    }

    /// Step back to the previously-visited state.
    ///
    /// Returns `false` when there is nothing to undo; the machine is
    /// unchanged in that case.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state change.
    ///
    /// Returns `false` when there is nothing to redo; the machine is
    /// unchanged in that case.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// True when `undo` would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when `redo` would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undo and redo entries without moving the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
