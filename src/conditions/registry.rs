//! named predicate registry
//!
//! condition entries refer to predicates by name; the caller registers the
//! predicates it wants available before evaluating. predicates receive the
//! call site's positional argument list verbatim and return a config value
//! whose truthiness decides the gate.

use std::collections::HashMap;
use std::fmt;

use strsim::levenshtein;

use crate::config::ConfigValue;

/// a registered condition predicate
pub type Predicate = Box<dyn Fn(&[ConfigValue]) -> ConfigValue + Send + Sync>;

/// name -> predicate lookup table
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// register a predicate under `name`, replacing any previous registration
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&[ConfigValue]) -> ConfigValue + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Box::new(predicate));
    }

    /// look up a predicate by name
    pub fn resolve(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// registered names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// closest registered name within Levenshtein distance 2, for
    /// did-you-mean hints on unresolvable references
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for candidate in self.predicates.keys() {
            let distance = levenshtein(name, candidate);
            if distance == 0 || distance > 2 || distance >= name.len() {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((candidate, distance));
            }
        }
        best.map(|(name, _)| name)
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("PredicateRegistry")
            .field("predicates", &names)
            .finish()
    }
}
