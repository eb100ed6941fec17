//! shorthand decoding
//!
//! turns a compact declaration string like `address:textarea.widefat` into
//! configuration entries. decoding is best-effort: a shorthand that does not
//! match its context's grammar leaves the name and config untouched, and a
//! config already decoded for a context is never decoded for it again.

use crate::config::{ConfigMap, ConfigValue, Context, Declaration};

use super::grammar::{Grammar, GroupKind};

/// config key collecting decoded CSS classes
const CLASS_KEY: &str = "class";
/// config key collecting decoded type options
const TYPE_OPTIONS_KEY: &str = "_type_options";

/// decode a declaration for `context`
///
/// a batch declaration decodes every entry independently against its own
/// config; the outer config passes through untouched.
pub fn decode(
    context: Context,
    declaration: Declaration,
    config: ConfigMap,
) -> (Declaration, ConfigMap) {
    match declaration {
        Declaration::Single(name) => {
            let (name, config) = decode_single(context, &name, config);
            (Declaration::Single(name), config)
        }
        Declaration::Batch(entries) => {
            let decoded = entries
                .into_iter()
                .map(|(name, entry_config)| decode_single(context, &name, entry_config))
                .collect();
            (Declaration::Batch(decoded), config)
        }
    }
}

/// decode one shorthand name for `context`, merging decoded values into
/// `config` and returning the canonical name
pub fn decode_single(context: Context, name: &str, mut config: ConfigMap) -> (String, ConfigMap) {
    normalize_positional_flags(&mut config);

    if config.is_decoded(context) {
        return (name.to_string(), config);
    }

    let grammar = Grammar::for_context(context);
    let caps = match grammar.captures(name) {
        Some(caps) => caps,
        // best-effort: a non-matching shorthand is left unchanged
        None => return (name.to_string(), config),
    };

    let mut canonical = name.to_string();
    for group in grammar.groups {
        let matched = match caps.name(group.name) {
            Some(m) => m.as_str(),
            None => continue,
        };

        match group.kind {
            GroupKind::Name => canonical = matched.to_string(),
            GroupKind::Verbatim => config.set(group.name, matched),
            GroupKind::Classes => apply_classes(&mut config, matched),
            GroupKind::Location => apply_location(&mut config, matched),
            GroupKind::Flags => apply_flags(&mut config, matched),
            GroupKind::TypeOptions => apply_type_options(&mut config, matched),
        }
    }

    // a field's type is itself a shorthand: decode it in the field_type
    // context against the same config so its options merge in
    if context == Context::Field {
        if let Some(field_type) = config.get_str("type").map(str::to_string) {
            let (canonical_type, merged) = decode_single(Context::FieldType, &field_type, config);
            config = merged;
            config.set("type", canonical_type);
        }
    }

    config.mark_decoded(context);
    (canonical, config)
}

/// convert pending list-style flag tokens into boolean entries
/// (`["!public", "sortable"]` becomes `{public: false, sortable: true}`)
fn normalize_positional_flags(config: &mut ConfigMap) {
    for token in config.take_positional() {
        set_flag(config, &token);
    }
}

fn set_flag(config: &mut ConfigMap, token: &str) {
    let name = token.trim_start_matches('!');
    if name.is_empty() {
        return;
    }
    config.set(name, !token.starts_with('!'));
}

fn apply_classes(config: &mut ConfigMap, matched: &str) {
    let classes: Vec<String> = matched
        .split('.')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    config.set(CLASS_KEY, classes);
}

/// `context/priority` placement tokens; unrecognized tokens are ignored
fn apply_location(config: &mut ConfigMap, matched: &str) {
    for token in matched.split('/') {
        match token {
            "normal" | "advanced" | "side" => config.set("context", token),
            "high" | "core" | "default" | "low" => config.set("priority", token),
            _ => {}
        }
    }
}

fn apply_flags(config: &mut ConfigMap, matched: &str) {
    for token in matched.split('.').filter(|s| !s.is_empty()) {
        set_flag(config, token);
    }
}

/// type options accumulate: a field's `=` option and its type's `.` options
/// land in the same ordered list
fn apply_type_options(config: &mut ConfigMap, matched: &str) {
    let mut options: Vec<String> = match config.get(TYPE_OPTIONS_KEY) {
        Some(ConfigValue::List(existing)) => existing.clone(),
        _ => Vec::new(),
    };
    options.extend(
        matched
            .split('.')
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
    config.set(TYPE_OPTIONS_KEY, options);
}
