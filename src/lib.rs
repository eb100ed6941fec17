// library crate for declsh
// exposes the decoder and condition gate to the CLI binary and to tests

pub mod cli;
pub mod conditions;
pub mod config;
pub mod shorthand;

pub use conditions::{evaluate, ConditionRef, Predicate, PredicateRegistry};
pub use config::{ConfigMap, ConfigValue, Context, Declaration};
pub use shorthand::{decode, decode_single};
