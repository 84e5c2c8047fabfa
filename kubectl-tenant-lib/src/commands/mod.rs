//! Command-line interface and orchestration for kubectl-tenant
//!
//! This module implements the plugin's commands on top of the cluster reader,
//! the extractors and the feature flags.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **get**: resolve the names a tenant may use for one resource type, then
//!   fetch those objects (or a single permitted one) and render them
//! - **list**: list every tenant with every `spec` section, or with disabled
//!   features hidden when `--respect-flags` is given
//! - **quota**, **namespaces**, **hibernation**, **host-validation**,
//!   **access-control**, **image-registries**, **service-accounts**: show one
//!   part of a single tenant
//! - **config**: inspect and change the feature flag file
//! - **version**: report the plugin version and the installed operator version
//!
//! ## Execution Flow
//!
//! The `run` function parses the command line with clap, sets up logging, connects
//! to the cluster when the command needs it, and routes to the handler. Handlers
//! render into a `String` first and only write to the [`Host`] once rendering has
//! succeeded, so a failed command never leaves partial output behind.
//!
//! `get` and `list --respect-flags` consult the flag file. Plain `list` and the
//! dedicated views always show their sections and never touch the file.

mod access_control;
mod common;
mod config;
mod get;
mod hibernation;
mod host;
mod host_validation;
mod list;
mod namespaces;
mod quota;
mod run;
mod string_list_view;
mod version;

/// Log target for command orchestration
const LOG_TARGET: &str = "  commands";

pub use access_control::process_access_control;
pub use hibernation::process_hibernation;
pub use host::Host;
#[cfg(test)]
pub use host::TestHost;
pub use host_validation::process_host_validation;
pub use namespaces::process_namespaces;
pub use quota::process_quota;
pub use run::{run, run_with_cluster};
pub use version::process_version;
