//! shorthand declaration decoding
//!
//! a shorthand packs several configuration entries into one compact string,
//! using fixed delimiter characters selected by the declaration context:
//!
//! - field: `address:textarea.widefat` (`:` type, `=` type option, `.` classes)
//! - field_type: `select.multiple` (`.` type options)
//! - meta_box: `mymetabox@side/high` (`@` context/priority placement)
//! - post_type: `project@25.5#dashicons-art=title,editor`
//!   (`/` plural, `@` menu position, `#` icon, `=` supports, `.` flags)
//! - taxonomy: `profile/people.hierarchical.!public` (`/` plural, `.` flags)
//!
//! decoding never fails: unmatched shorthand passes through unchanged, and a
//! handled-context marker keeps repeat decodes from re-applying.

mod decode;
mod grammar;

pub use decode::{decode, decode_single};
pub use grammar::{Grammar, GroupKind, GroupSpec};
