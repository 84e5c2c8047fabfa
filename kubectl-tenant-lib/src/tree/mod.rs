//! Typed representation of untyped Kubernetes object bodies
//!
//! Objects fetched from the cluster arrive as arbitrary JSON. This module models
//! them as [`Attr`], a tagged union of null, boolean, number, string, array and
//! object values, and offers path-based accessors that distinguish a missing
//! field ([`FieldError::Absent`]) from a field of the wrong kind
//! ([`FieldError::WrongShape`]).

mod attr;
mod field_error;

pub use attr::{Attr, AttrKind, AttrMap};
pub use field_error::{FieldError, format_path};
