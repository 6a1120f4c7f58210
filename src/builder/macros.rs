//! Macros for ergonomic configuration construction.

/// Declare a state graph inline.
///
/// Produces a [`Config`](crate::core::Config); like the builder, no
/// validation happens until the configuration is handed to
/// [`StateMachine::new`](crate::core::StateMachine::new).
///
/// # Example
///
/// ```
/// use turnstile::fsm_config;
/// use turnstile::core::StateMachine;
///
/// let config = fsm_config! {
///     initial: "normal",
///     "normal" => { "study" => "busy" },
///     "busy" => { "get_tired" => "sleeping", "get_hungry" => "hungry" },
///     "hungry" => { "eat" => "normal" },
///     "sleeping" => { "get_hungry" => "hungry", "get_up" => "normal" },
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("study").unwrap();
/// assert_eq!(machine.state(), "busy");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        $(
            $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
        ),* $(,)?
    ) => {{
        let mut states = $crate::__private::IndexMap::new();
        $(
            let mut def = $crate::core::StateDef::new();
            $(
                def.transitions
                    .insert(($event).to_string(), ($target).to_string());
            )*
            states.insert(($state).to_string(), def);
        )*
        $crate::core::Config::new($initial, states)
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateMachine;

    #[test]
    fn fsm_config_macro_builds_working_machine() {
        let config = fsm_config! {
            initial: "off",
            "off" => { "toggle" => "on" },
            "on" => { "toggle" => "off" },
        };

        let mut machine = StateMachine::new(config).unwrap();
        machine.trigger("toggle").unwrap();
        assert_eq!(machine.state(), "on");
        machine.trigger("toggle").unwrap();
        assert_eq!(machine.state(), "off");
    }

    #[test]
    fn fsm_config_allows_states_without_transitions() {
        let config = fsm_config! {
            initial: "start",
            "start" => { "finish" => "end" },
            "end" => {},
        };

        let mut machine = StateMachine::new(config).unwrap();
        machine.trigger("finish").unwrap();
        assert!(machine.trigger("finish").is_err());
    }

    #[test]
    fn fsm_config_preserves_declaration_order() {
        let config = fsm_config! {
            initial: "b",
            "b" => {},
            "a" => {},
            "c" => {},
        };

        assert_eq!(config.state_names().collect::<Vec<_>>(), ["b", "a", "c"]);
    }
}
