//! per-context shorthand grammars
//!
//! each context owns an ordered list of group specs. a spec contributes one
//! named capture to the context's pattern; the whole pattern is anchored and
//! compiled once into a global table. the group kind selects the decode rule
//! applied to its match.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Context;

/// decode rule applied to a matched group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// the bare leading name token
    Name,
    /// store the raw body under the group name (type, plural, position, ...)
    Verbatim,
    /// `.`-separated CSS classes, stored as a list under `class`
    Classes,
    /// `/`-separated metabox placement tokens (context and priority)
    Location,
    /// `.`-separated boolean flags, each optionally `!`-negated
    Flags,
    /// `.`-separated type options, stored as a list under `_type_options`
    TypeOptions,
}

/// one grammar group: a delimiter, a body pattern, and a decode rule
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    /// capture name, also the config key for verbatim groups
    pub name: &'static str,
    pub kind: GroupKind,
    /// delimiter fragment introducing the group (empty for the name group)
    prefix: &'static str,
    /// body pattern for one token
    body: &'static str,
    /// repeatable groups capture every `<delimiter><token>` repetition;
    /// the delimiter stays in the capture and is stripped when decoding
    repeat: bool,
}

impl GroupSpec {
    const fn name(body: &'static str) -> Self {
        GroupSpec {
            name: "name",
            kind: GroupKind::Name,
            prefix: "",
            body,
            repeat: false,
        }
    }

    const fn group(
        name: &'static str,
        kind: GroupKind,
        prefix: &'static str,
        body: &'static str,
    ) -> Self {
        GroupSpec {
            name,
            kind,
            prefix,
            body,
            repeat: false,
        }
    }

    const fn repeated(
        name: &'static str,
        kind: GroupKind,
        prefix: &'static str,
        body: &'static str,
    ) -> Self {
        GroupSpec {
            name,
            kind,
            prefix,
            body,
            repeat: true,
        }
    }

    /// regex fragment for this group; every group is optional except name
    fn fragment(&self) -> String {
        match self.kind {
            GroupKind::Name => format!("(?P<{}>{})", self.name, self.body),
            _ if self.repeat => {
                format!("(?P<{}>(?:{}{})+)?", self.name, self.prefix, self.body)
            }
            _ => format!("(?:{}(?P<{}>{}))?", self.prefix, self.name, self.body),
        }
    }
}

const FIELD_GROUPS: &[GroupSpec] = &[
    // bracket characters allowed for array-style field names like meta[key]
    GroupSpec::name(r"[\w\[\]-]+"),
    GroupSpec::group("type", GroupKind::Verbatim, ":", r"[\w-]+"),
    GroupSpec::group("type_option", GroupKind::TypeOptions, "=", r"[\w-]+"),
    GroupSpec::repeated("classes", GroupKind::Classes, r"\.", r"[\w-]+"),
];

const FIELD_TYPE_GROUPS: &[GroupSpec] = &[
    GroupSpec::name(r"[\w-]+"),
    GroupSpec::repeated("type_options", GroupKind::TypeOptions, r"\.", r"!?[\w-]+"),
];

const META_BOX_GROUPS: &[GroupSpec] = &[
    GroupSpec::name(r"[\w-]+"),
    GroupSpec::group("location", GroupKind::Location, "@", r"[\w/-]+"),
];

const POST_TYPE_GROUPS: &[GroupSpec] = &[
    GroupSpec::name(r"[\w-]+"),
    GroupSpec::group("plural", GroupKind::Verbatim, "/", r"[\w-]+"),
    GroupSpec::group("position", GroupKind::Verbatim, "@", r"[\d.]+"),
    GroupSpec::group("icon", GroupKind::Verbatim, "#", r"[\w-]+"),
    GroupSpec::group("supports", GroupKind::Verbatim, "=", r"[\w,-]+"),
    GroupSpec::repeated("flags", GroupKind::Flags, r"\.", r"!?[\w-]+"),
];

const TAXONOMY_GROUPS: &[GroupSpec] = &[
    GroupSpec::name(r"[\w-]+"),
    GroupSpec::group("plural", GroupKind::Verbatim, "/", r"[\w-]+"),
    GroupSpec::repeated("flags", GroupKind::Flags, r"\.", r"!?[\w-]+"),
];

/// a compiled context grammar
#[derive(Debug)]
pub struct Grammar {
    pub context: Context,
    pub groups: &'static [GroupSpec],
    regex: Regex,
}

impl Grammar {
    fn compile(context: Context) -> Self {
        let groups = Self::groups_for(context);
        let pattern: String = groups.iter().map(|g| g.fragment()).collect();
        // anchored: a shorthand must match in full or not at all
        let regex = Regex::new(&format!("^{}$", pattern)).expect("grammar pattern must compile");
        Grammar {
            context,
            groups,
            regex,
        }
    }

    fn groups_for(context: Context) -> &'static [GroupSpec] {
        match context {
            Context::Field => FIELD_GROUPS,
            Context::FieldType => FIELD_TYPE_GROUPS,
            Context::MetaBox => META_BOX_GROUPS,
            Context::PostType => POST_TYPE_GROUPS,
            Context::Taxonomy => TAXONOMY_GROUPS,
        }
    }

    /// the compiled grammar for a context
    pub fn for_context(context: Context) -> &'static Grammar {
        &GRAMMARS[&context]
    }

    /// match a shorthand name against the full anchored pattern
    pub fn captures<'t>(&self, name: &'t str) -> Option<regex::Captures<'t>> {
        self.regex.captures(name)
    }

    /// group names, in declaration order
    pub fn group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().map(|g| g.name)
    }
}

lazy_static! {
    static ref GRAMMARS: HashMap<Context, Grammar> = {
        let mut table = HashMap::new();
        for context in Context::ALL {
            table.insert(context, Grammar::compile(context));
        }
        table
    };
}
