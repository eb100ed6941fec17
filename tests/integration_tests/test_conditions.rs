// end-to-end condition gating through the public API

use declsh::{decode_single, evaluate, ConfigMap, ConfigValue, Context, PredicateRegistry};

use crate::common::{config_from, registry_returning};

#[test]
fn test_empty_config_always_passes() {
    let registry = PredicateRegistry::new();
    assert!(evaluate(&ConfigMap::new(), &registry, &[]));
    assert!(evaluate(
        &ConfigMap::new(),
        &registry,
        &[ConfigValue::String("post".to_string())]
    ));
}

#[test]
fn test_negated_condition_follows_predicate() {
    let config = config_from(r#"{ "condition": "!is_admin" }"#);

    let registry = registry_returning("is_admin", ConfigValue::Bool(false));
    assert!(evaluate(&config, &registry, &[]));

    let registry = registry_returning("is_admin", ConfigValue::Bool(true));
    assert!(!evaluate(&config, &registry, &[]));
}

#[test]
fn test_falsy_predicate_results_count_as_false() {
    let config = config_from(r#"{ "condition": "!is_admin" }"#);

    // "" is falsy, so the negated condition holds
    let registry = registry_returning("is_admin", ConfigValue::String(String::new()));
    assert!(evaluate(&config, &registry, &[]));
}

#[test]
fn test_unresolvable_condition_fails_open() {
    let config = config_from(r#"{ "condition": "never_registered" }"#);
    assert!(evaluate(&config, &PredicateRegistry::new(), &[]));
}

#[test]
fn test_decode_then_gate() {
    // a decoded declaration carries its condition through to the gate
    let config = config_from(r#"{ "condition": "on_edit_screen" }"#);
    let (name, config) = decode_single(Context::Field, "address:textarea.widefat", config);

    assert_eq!(name, "address");
    assert_eq!(config.get_str("condition"), Some("on_edit_screen"));

    let mut registry = PredicateRegistry::new();
    registry.register("on_edit_screen", |args| {
        ConfigValue::Bool(args.first().and_then(ConfigValue::as_str) == Some("edit"))
    });

    assert!(evaluate(
        &config,
        &registry,
        &[ConfigValue::String("edit".to_string())]
    ));
    assert!(!evaluate(
        &config,
        &registry,
        &[ConfigValue::String("list".to_string())]
    ));
}
