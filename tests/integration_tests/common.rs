// shared utilities for integration tests

use declsh::{ConfigMap, ConfigValue, PredicateRegistry};

/// build a config map from a JSON5 literal
pub fn config_from(payload: &str) -> ConfigMap {
    let json: serde_json::Value = json5::from_str(payload).expect("valid JSON5 payload");
    ConfigMap::from_json(&json).expect("payload must be an object or flag array")
}

/// registry with a single predicate returning a fixed value
pub fn registry_returning(name: &str, result: ConfigValue) -> PredicateRegistry {
    let mut registry = PredicateRegistry::new();
    registry.register(name, move |_| result.clone());
    registry
}
