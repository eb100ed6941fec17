//! core data model for shorthand declarations
//!
//! a declaration is a name (single shorthand string or a batch of
//! name -> config pairs) plus a configuration map. the decoder fills the
//! map from the shorthand; the condition evaluator gates on it afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde_json::Value as JsonValue;

/// reserved JSON key recording which contexts a config has been decoded for
pub const DECODED_KEY: &str = "_decoded";

/// declaration context - selects which grammar groups apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Context {
    /// form field (`address:textarea.widefat`)
    #[value(name = "field")]
    Field,
    /// field type sub-shorthand (`select.multiple`)
    #[value(name = "field_type")]
    FieldType,
    /// metabox (`mymetabox@side/high`)
    #[value(name = "meta_box")]
    MetaBox,
    /// post type (`project@25.5#dashicons-art=title,editor`)
    #[value(name = "post_type")]
    PostType,
    /// taxonomy (`profile/people.hierarchical`)
    #[value(name = "taxonomy")]
    Taxonomy,
}

impl Context {
    /// all contexts, in grammar-table order
    pub const ALL: [Context; 5] = [
        Context::Field,
        Context::FieldType,
        Context::MetaBox,
        Context::PostType,
        Context::Taxonomy,
    ];

    /// parse a context tag (exact forms only)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "field" => Some(Context::Field),
            "field_type" => Some(Context::FieldType),
            "meta_box" => Some(Context::MetaBox),
            "post_type" => Some(Context::PostType),
            "taxonomy" => Some(Context::Taxonomy),
            _ => None,
        }
    }

    /// the context tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Field => "field",
            Context::FieldType => "field_type",
            Context::MetaBox => "meta_box",
            Context::PostType => "post_type",
            Context::Taxonomy => "taxonomy",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Context {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Context::parse(s).ok_or_else(|| {
            format!(
                "unknown context '{}', expected one of: field, field_type, meta_box, post_type, taxonomy",
                s
            )
        })
    }
}

/// a configuration entry value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// string value
    String(String),
    /// boolean flag
    Bool(bool),
    /// ordered sequence of strings (e.g. CSS classes, type options)
    List(Vec<String>),
    /// nested configuration map
    Map(ConfigMap),
}

impl ConfigValue {
    /// try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// try to get as list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// try to get as nested map
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// loose truthiness: empty strings, `false`, and empty collections are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::String(s) => !s.is_empty(),
            ConfigValue::Bool(b) => *b,
            ConfigValue::List(l) => !l.is_empty(),
            ConfigValue::Map(m) => !m.is_empty(),
        }
    }

    /// convert a JSON value into a config value
    ///
    /// numbers are carried as strings (shorthand configs are stringly typed),
    /// nulls are dropped, non-string list items are skipped.
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::String(s) => Some(ConfigValue::String(s.clone())),
            JsonValue::Bool(b) => Some(ConfigValue::Bool(*b)),
            JsonValue::Number(n) => Some(ConfigValue::String(n.to_string())),
            JsonValue::Array(items) => {
                let list = items
                    .iter()
                    .filter_map(|v| match v {
                        JsonValue::String(s) => Some(s.clone()),
                        JsonValue::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                Some(ConfigValue::List(list))
            }
            JsonValue::Object(_) => ConfigMap::from_json(json).map(ConfigValue::Map),
            JsonValue::Null => None,
        }
    }

    /// convert into a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            ConfigValue::String(s) => JsonValue::String(s.clone()),
            ConfigValue::Bool(b) => JsonValue::Bool(*b),
            ConfigValue::List(l) => {
                JsonValue::Array(l.iter().map(|s| JsonValue::String(s.clone())).collect())
            }
            ConfigValue::Map(m) => m.to_json(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::List(l) => {
                write!(f, "[")?;
                for (i, item) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigValue::Map(m) => write!(f, "{{{} entries}}", m.len()),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(l: Vec<String>) -> Self {
        ConfigValue::List(l)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(m: ConfigMap) -> Self {
        ConfigValue::Map(m)
    }
}

/// a configuration map: named entries plus pending positional flag tokens
/// and the handled-context markers that make decoding idempotent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
    entries: BTreeMap<String, ConfigValue>,
    positional: Vec<String>,
    decoded: Vec<Context>,
}

impl ConfigMap {
    /// create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// set an entry
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// get an entry
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// get a string entry
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// get a boolean entry
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// get a list entry
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ConfigValue::as_list)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// iterate entries in deterministic key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// append a list-style positional flag token (e.g. `"!public"`)
    ///
    /// pending tokens are converted into boolean entries by the decoder's
    /// normalization pass.
    pub fn push_flag(&mut self, token: impl Into<String>) {
        self.positional.push(token.into());
    }

    /// pending positional flag tokens
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// drain the pending positional flag tokens
    pub(crate) fn take_positional(&mut self) -> Vec<String> {
        std::mem::take(&mut self.positional)
    }

    /// whether this config was already decoded for `context`
    pub fn is_decoded(&self, context: Context) -> bool {
        self.decoded.contains(&context)
    }

    /// record `context` as decoded
    pub fn mark_decoded(&mut self, context: Context) {
        if !self.decoded.contains(&context) {
            self.decoded.push(context);
        }
    }

    /// contexts this config has been decoded for, in decode order
    pub fn decoded(&self) -> &[Context] {
        &self.decoded
    }

    /// build a config map from JSON
    ///
    /// an object becomes named entries (the reserved `_decoded` key restores
    /// the handled-context markers); an array of strings becomes positional
    /// flag tokens. anything else is not a config.
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Object(obj) => {
                let mut map = ConfigMap::new();
                for (key, value) in obj {
                    if key == DECODED_KEY {
                        if let JsonValue::Array(tags) = value {
                            for tag in tags.iter().filter_map(JsonValue::as_str) {
                                if let Some(context) = Context::parse(tag) {
                                    map.mark_decoded(context);
                                }
                            }
                        }
                        continue;
                    }
                    if let Some(value) = ConfigValue::from_json(value) {
                        map.set(key, value);
                    }
                }
                Some(map)
            }
            JsonValue::Array(items) => {
                let mut map = ConfigMap::new();
                for token in items.iter().filter_map(JsonValue::as_str) {
                    map.push_flag(token);
                }
                Some(map)
            }
            _ => None,
        }
    }

    /// render as a JSON object, recording handled contexts under `_decoded`
    pub fn to_json(&self) -> JsonValue {
        let mut obj = serde_json::Map::new();
        for (key, value) in &self.entries {
            obj.insert(key.clone(), value.to_json());
        }
        if !self.decoded.is_empty() {
            obj.insert(
                DECODED_KEY.to_string(),
                JsonValue::Array(
                    self.decoded
                        .iter()
                        .map(|c| JsonValue::String(c.as_str().to_string()))
                        .collect(),
                ),
            );
        }
        JsonValue::Object(obj)
    }
}

/// the name side of a declaration: one shorthand string, or a batch of
/// name -> config pairs decoded independently
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Single(String),
    Batch(Vec<(String, ConfigMap)>),
}

impl Declaration {
    pub fn single(name: impl Into<String>) -> Self {
        Declaration::Single(name.into())
    }

    /// the name when this is a single declaration
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Declaration::Single(name) => Some(name),
            Declaration::Batch(_) => None,
        }
    }

    /// build a declaration from JSON: a string is a single name, an object is
    /// a batch of name -> config pairs (non-config values get an empty config)
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::String(s) => Some(Declaration::Single(s.clone())),
            JsonValue::Object(obj) => {
                let entries = obj
                    .iter()
                    .map(|(name, value)| {
                        let config = ConfigMap::from_json(value).unwrap_or_default();
                        (name.clone(), config)
                    })
                    .collect();
                Some(Declaration::Batch(entries))
            }
            _ => None,
        }
    }
}

impl From<&str> for Declaration {
    fn from(s: &str) -> Self {
        Declaration::Single(s.to_string())
    }
}
