//! condition evaluation
//!
//! a config's optional `condition` entry names a registered predicate,
//! with a leading `!` flipping the expected polarity. evaluation is a pure
//! gate and fails open: a missing or unresolvable condition always passes.

use crate::config::{ConfigMap, ConfigValue};

use super::registry::{Predicate, PredicateRegistry};

/// resolution of a config's `condition` entry
pub enum ConditionRef<'a> {
    /// no condition entry (or not a string) - passes by default
    None,
    /// predicate result is expected truthy
    Direct(&'a Predicate),
    /// `!`-prefixed reference - predicate result is expected falsy
    Negated(&'a Predicate),
    /// the reference names no registered predicate
    Unresolvable(String),
}

impl<'a> ConditionRef<'a> {
    /// resolve the `condition` entry of `config` against `registry`
    pub fn resolve(config: &ConfigMap, registry: &'a PredicateRegistry) -> Self {
        let reference = match config.get("condition").and_then(ConfigValue::as_str) {
            Some(reference) => reference,
            None => return ConditionRef::None,
        };

        let negated = reference.starts_with('!');
        let name = reference.trim_start_matches('!');

        match registry.resolve(name) {
            Some(predicate) if negated => ConditionRef::Negated(predicate),
            Some(predicate) => ConditionRef::Direct(predicate),
            None => ConditionRef::Unresolvable(name.to_string()),
        }
    }
}

/// evaluate a config's render condition
///
/// `args` is the call site's positional argument list, passed to the
/// resolved predicate verbatim. the predicate's result is compared loosely:
/// any falsy return (`false`, `""`, empty list) satisfies a negated
/// condition.
pub fn evaluate(config: &ConfigMap, registry: &PredicateRegistry, args: &[ConfigValue]) -> bool {
    match ConditionRef::resolve(config, registry) {
        ConditionRef::None => true,
        ConditionRef::Direct(predicate) => predicate(args).is_truthy(),
        ConditionRef::Negated(predicate) => !predicate(args).is_truthy(),
        ConditionRef::Unresolvable(name) => {
            // unresolvable conditions are treated as absent
            match registry.suggest(&name) {
                Some(suggestion) => eprintln!(
                    "warning: unresolvable condition '{}' (did you mean '{}'?)",
                    name, suggestion
                ),
                None => eprintln!("warning: unresolvable condition '{}'", name),
            }
            true
        }
    }
}
