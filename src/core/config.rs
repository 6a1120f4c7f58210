//! Declarative state graph configuration.
//!
//! A [`Config`] is an ordered mapping from state name to [`StateDef`],
//! plus a designated initial state. It is immutable once handed to a
//! [`StateMachine`](crate::core::StateMachine); all mutation happens on
//! the machine's current-state pointer and history, never on the graph.

use crate::core::error::MachineError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All outgoing transitions for a single state.
///
/// Maps event name to target state name. Insertion order is preserved,
/// matching the order events were declared in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name -> target state name.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a state definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the target state for an event, if one is defined.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state handles the given event.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable state graph: an ordered state-name to [`StateDef`] mapping
/// and the name of the initial state.
///
/// Configurations can be built three ways: deserialized from JSON via
/// [`Config::from_json`], assembled with the fluent
/// [`ConfigBuilder`](crate::builder::ConfigBuilder), or declared inline
/// with the [`fsm_config!`](crate::fsm_config) macro.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "toggle": "on" } },
///         "on": { "transitions": { "toggle": "off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), ["off", "on"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    initial: String,
    states: IndexMap<String, StateDef>,
}

impl Config {
    /// Create a configuration from its parts.
    ///
    /// No validation happens here; [`StateMachine::new`] is the boundary
    /// that rejects unusable configurations.
    ///
    /// [`StateMachine::new`]: crate::core::StateMachine::new
    pub fn new(initial: impl Into<String>, states: IndexMap<String, StateDef>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// The expected shape matches the declarative object the machine is
    /// described with: a top-level `initial` string and a `states` map of
    /// `{ "transitions": { event: target } }` entries. State and event
    /// order in the document is preserved.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        serde_json::from_str(json).map_err(|e| MachineError::Config(e.to_string()))
    }

    /// Start building a configuration with the fluent API.
    pub fn builder() -> crate::builder::ConfigBuilder {
        crate::builder::ConfigBuilder::new()
    }

    /// The designated initial state name.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Look up a state definition by name.
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    /// Check whether a state name is part of the graph.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Iterate over all state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Iterate over `(name, definition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when the graph has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config::from_json(
            r#"{
                "initial": "normal",
                "states": {
                    "normal": { "transitions": { "study": "busy" } },
                    "busy": { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
                    "hungry": { "transitions": { "eat": "normal" } },
                    "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn from_json_preserves_declaration_order() {
        let config = sample();
        let names: Vec<_> = config.state_names().collect();
        assert_eq!(names, ["normal", "busy", "hungry", "sleeping"]);
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, MachineError::Config(_)));
    }

    #[test]
    fn state_lookup_is_explicit() {
        let config = sample();
        assert!(config.contains_state("busy"));
        assert!(!config.contains_state("limbo"));
        assert!(config.state("limbo").is_none());
    }

    #[test]
    fn state_def_target_resolves_events() {
        let config = sample();
        let busy = config.state("busy").unwrap();
        assert_eq!(busy.target("get_tired"), Some("sleeping"));
        assert_eq!(busy.target("fly"), None);
        assert!(busy.handles("get_hungry"));
        assert!(!busy.handles("eat"));
    }

    #[test]
    fn missing_transitions_field_defaults_to_empty() {
        let config = Config::from_json(
            r#"{ "initial": "done", "states": { "done": {} } }"#,
        )
        .unwrap();
        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = sample();
        let json = serde_json::to_string(&config).unwrap();
        let back = Config::from_json(&json).unwrap();
        assert_eq!(config, back);
    }
}
