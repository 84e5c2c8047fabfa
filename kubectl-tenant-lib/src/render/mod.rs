//! Output rendering
//!
//! Every generator writes into a `core::fmt::Write` so commands can render into
//! a `String` and hand the result to the host in one piece.
//!
//! - **objects**: cluster objects as a `kubectl get`-style table, a `<Kind>List`
//!   document in JSON or YAML, or `<plural>.<group>/<name>` lines
//! - **structured**: any serializable value as pretty JSON or YAML
//! - **tree**: an indented `key: value` rendering of an untyped tree, used by
//!   the human-readable views

mod objects;
mod structured;
mod tree;

use clap::ValueEnum;

pub use objects::{generate_object, generate_objects, object_list};
pub use structured::{generate_json, generate_yaml};
pub use tree::generate_tree;

/// Output format selected with `-o`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,

    /// YAML
    Yaml,

    /// `<resource>/<name>` per object
    Name,
}
