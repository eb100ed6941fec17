// JSON bridging of configs and declarations

use declsh::{decode_single, ConfigMap, Context, Declaration};
use serde_json::json;

use crate::common::config_from;

#[test]
fn test_decoded_config_serializes_with_marker() {
    let (_, config) = decode_single(Context::MetaBox, "mymetabox@side/high", ConfigMap::new());
    let json = config.to_json();

    assert_eq!(json["context"], json!("side"));
    assert_eq!(json["priority"], json!("high"));
    assert_eq!(json["_decoded"], json!(["meta_box"]));
}

#[test]
fn test_marker_survives_a_json_round_trip() {
    let (_, config) = decode_single(Context::Field, "address:textarea", ConfigMap::new());

    let restored = ConfigMap::from_json(&config.to_json()).unwrap();
    assert!(restored.is_decoded(Context::Field));
    assert!(restored.is_decoded(Context::FieldType));

    // re-decoding the restored config is still a no-op
    let (_, redecoded) = decode_single(Context::Field, "address:select", restored.clone());
    assert_eq!(redecoded, restored);
}

#[test]
fn test_json5_payloads_are_accepted() {
    // trailing commas and unquoted keys
    let config = config_from("{ type: 'textarea', sortable: true, }");
    assert_eq!(config.get_str("type"), Some("textarea"));
    assert_eq!(config.get_bool("sortable"), Some(true));
}

#[test]
fn test_declaration_from_json_shapes() {
    assert_eq!(
        Declaration::from_json(&json!("address")),
        Some(Declaration::Single("address".to_string()))
    );
    assert!(Declaration::from_json(&json!(["not", "a", "batch"])).is_none());

    let batch = Declaration::from_json(&json!({ "a": {}, "b": { "type": "tel" } })).unwrap();
    match batch {
        Declaration::Batch(entries) => assert_eq!(entries.len(), 2),
        _ => panic!("expected Batch declaration"),
    }
}

#[test]
fn test_numbers_are_carried_as_strings() {
    let config = config_from(r#"{ "position": 25.5 }"#);
    assert_eq!(config.get_str("position"), Some("25.5"));
}
