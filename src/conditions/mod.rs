//! render-condition gating
//!
//! declarations may carry an optional `condition` entry naming a predicate,
//! negatable with a leading `!`. the caller registers predicates by name and
//! supplies the positional arguments; this module only gates.
//!
//! the posture is fail-open throughout: no condition, a non-string entry, or
//! an unregistered name all pass, so a malformed condition never blocks a
//! declaration from rendering.

mod eval;
mod registry;

pub use eval::{evaluate, ConditionRef};
pub use registry::{Predicate, PredicateRegistry};
