// end-to-end decoding through the public API

use declsh::{decode, decode_single, ConfigMap, Context, Declaration};

use crate::common::config_from;

#[test]
fn test_field_shorthand_end_to_end() {
    let (name, config) = decode_single(Context::Field, "address:textarea.widefat", ConfigMap::new());

    assert_eq!(name, "address");
    assert_eq!(config.get_str("type"), Some("textarea"));
    assert_eq!(config.get_list("class"), Some(&["widefat".to_string()][..]));
}

#[test]
fn test_meta_box_shorthand_end_to_end() {
    let (name, config) = decode_single(Context::MetaBox, "mymetabox@side/high", ConfigMap::new());

    assert_eq!(name, "mymetabox");
    assert_eq!(config.get_str("context"), Some("side"));
    assert_eq!(config.get_str("priority"), Some("high"));
}

#[test]
fn test_post_type_shorthand_end_to_end() {
    let (name, config) = decode_single(
        Context::PostType,
        "project@25.5#dashicons-art=title,editor",
        ConfigMap::new(),
    );

    assert_eq!(name, "project");
    assert_eq!(config.get_str("position"), Some("25.5"));
    assert_eq!(config.get_str("icon"), Some("dashicons-art"));
    assert_eq!(config.get_str("supports"), Some("title,editor"));
}

#[test]
fn test_taxonomy_shorthand_end_to_end() {
    let (name, config) = decode_single(
        Context::Taxonomy,
        "profile/people.hierarchical.!public",
        ConfigMap::new(),
    );

    assert_eq!(name, "profile");
    assert_eq!(config.get_str("plural"), Some("people"));
    assert_eq!(config.get_bool("hierarchical"), Some(true));
    assert_eq!(config.get_bool("public"), Some(false));
}

#[test]
fn test_decoding_twice_is_a_no_op() {
    let (name, config) = decode_single(Context::Field, "address:textarea.widefat", ConfigMap::new());
    let (name_again, config_again) = decode_single(Context::Field, &name, config.clone());

    assert_eq!(name_again, name);
    assert_eq!(config_again, config);
}

#[test]
fn test_contexts_decode_independently() {
    // the same config can be decoded once per context
    let (_, config) = decode_single(Context::PostType, "project/projects", ConfigMap::new());
    assert!(config.is_decoded(Context::PostType));
    assert!(!config.is_decoded(Context::Taxonomy));

    let (_, config) = decode_single(Context::Taxonomy, "kind/kinds", config);
    assert!(config.is_decoded(Context::PostType));
    assert!(config.is_decoded(Context::Taxonomy));
}

#[test]
fn test_nonmatching_shorthand_passes_through() {
    let (name, config) = decode_single(Context::Field, "not a shorthand!", ConfigMap::new());

    assert_eq!(name, "not a shorthand!");
    assert!(config.is_empty());
    assert!(config.decoded().is_empty());
}

#[test]
fn test_positional_flags_normalize_before_matching() {
    let config = config_from(r#"["!public", "sortable"]"#);
    let (_, config) = decode_single(Context::PostType, "project", config);

    assert_eq!(config.get_bool("public"), Some(false));
    assert_eq!(config.get_bool("sortable"), Some(true));
}

#[test]
fn test_field_type_recursion_merges_options() {
    let config = config_from(r#"{ "type": "select.multiple" }"#);
    let (name, config) = decode_single(Context::Field, "colors", config);

    assert_eq!(name, "colors");
    assert_eq!(config.get_str("type"), Some("select"));
    assert_eq!(
        config.get_list("_type_options"),
        Some(&["multiple".to_string()][..])
    );
    assert!(config.is_decoded(Context::Field));
    assert!(config.is_decoded(Context::FieldType));
}

#[test]
fn test_batch_declaration_decodes_each_entry() {
    let json: serde_json::Value = json5::from_str(
        r#"{
            "address:textarea.widefat": {},
            "phone": { "type": "tel" },
        }"#,
    )
    .unwrap();
    let declaration = Declaration::from_json(&json).unwrap();

    let (declaration, outer) = decode(Context::Field, declaration, ConfigMap::new());

    assert!(outer.is_empty());
    let entries = match declaration {
        Declaration::Batch(entries) => entries,
        _ => panic!("expected Batch declaration"),
    };

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "address");
    assert_eq!(entries[0].1.get_str("type"), Some("textarea"));
    assert_eq!(entries[1].0, "phone");
    assert_eq!(entries[1].1.get_str("type"), Some("tel"));
    assert!(entries[1].1.is_decoded(Context::Field));
}
