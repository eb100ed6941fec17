//! output formatting for scriptable CLI output
//!
//! text mode prints `key: value` lines for humans; JSON mode prints one
//! machine-readable object per invocation and is auto-enabled when stdout
//! is piped.

use std::io::IsTerminal;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::config::{ConfigMap, Context};
use crate::shorthand::Grammar;

/// output mode determines how results are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// human-readable text output
    Text,
    /// machine-readable JSON output
    Json,
    /// no output on success (errors still go to stderr)
    Quiet,
}

impl OutputMode {
    /// determine output mode from CLI flags and environment
    ///
    /// priority: quiet > json > no_json > auto-detect
    pub fn from_flags(json: bool, no_json: bool, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        if json {
            return Self::Json;
        }
        if no_json {
            return Self::Text;
        }
        // auto-detect: JSON when stdout is not a TTY (piped)
        if !std::io::stdout().is_terminal() {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_quiet(&self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// one decoded declaration
#[derive(Serialize)]
struct DecodedData {
    name: String,
    config: JsonValue,
}

impl DecodedData {
    fn new(name: &str, config: &ConfigMap) -> Self {
        Self {
            name: name.to_string(),
            config: config.to_json(),
        }
    }
}

/// a decoded batch declaration
#[derive(Serialize)]
struct BatchData {
    batch: Vec<DecodedData>,
}

/// one context with its grammar group names
#[derive(Serialize)]
struct ContextData {
    context: String,
    groups: Vec<String>,
}

/// list of known contexts
#[derive(Serialize)]
struct ContextsData {
    contexts: Vec<ContextData>,
}

fn print_json<T: Serialize>(data: &T) {
    if let Ok(json) = serde_json::to_string(data) {
        println!("{}", json);
    }
}

fn print_config_text(config: &ConfigMap) {
    for (key, value) in config.entries() {
        println!("{}: {}", key, value);
    }
    if !config.decoded().is_empty() {
        let tags: Vec<&str> = config.decoded().iter().map(Context::as_str).collect();
        println!("decoded: [{}]", tags.join(", "));
    }
}

pub fn print_decoded(mode: OutputMode, name: &str, config: &ConfigMap) {
    match mode {
        OutputMode::Quiet => {}
        OutputMode::Json => print_json(&DecodedData::new(name, config)),
        OutputMode::Text => {
            println!("name: {}", name);
            print_config_text(config);
        }
    }
}

pub fn print_batch(mode: OutputMode, entries: &[(String, ConfigMap)]) {
    match mode {
        OutputMode::Quiet => {}
        OutputMode::Json => print_json(&BatchData {
            batch: entries
                .iter()
                .map(|(name, config)| DecodedData::new(name, config))
                .collect(),
        }),
        OutputMode::Text => {
            for (i, (name, config)) in entries.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("name: {}", name);
                print_config_text(config);
            }
        }
    }
}

pub fn print_contexts(mode: OutputMode) {
    match mode {
        OutputMode::Quiet => {}
        OutputMode::Json => print_json(&ContextsData {
            contexts: Context::ALL
                .iter()
                .map(|&context| ContextData {
                    context: context.as_str().to_string(),
                    groups: Grammar::for_context(context)
                        .group_names()
                        .map(str::to_string)
                        .collect(),
                })
                .collect(),
        }),
        OutputMode::Text => {
            for context in Context::ALL {
                let groups: Vec<&str> = Grammar::for_context(context).group_names().collect();
                println!("{}: {}", context, groups.join(", "));
            }
        }
    }
}
