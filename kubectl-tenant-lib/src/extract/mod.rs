//! Pure extraction of normalized values from tenant object bodies
//!
//! Every function here takes an [`Attr`](crate::tree::Attr) and a field path and
//! never mutates its input. Missing or malformed optional data degrades to an
//! empty result instead of an error; only typed single-value reads surface a
//! [`FieldError`](crate::tree::FieldError), so callers can tell "not set" apart
//! from "set to the wrong kind of value".
//!
//! List results are always [`ExtractedNames`]: trimmed, deduplicated and sorted.

mod extracted_names;
mod extractors;
mod namespaces;

pub use extracted_names::ExtractedNames;
pub use extractors::{extract_map, extract_names_from_object_list, extract_single_string, extract_string_list};
pub use namespaces::{extract_namespace_names, extract_tenant_namespace_names};

/// Log target for extraction diagnostics
const LOG_TARGET: &str = "   extract";
