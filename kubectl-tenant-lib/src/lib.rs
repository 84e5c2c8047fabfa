#![doc(hidden)]

//! Core library for kubectl-tenant
//!
//! This library holds all functionality of the kubectl-tenant plugin, which shows
//! tenant-scoped views of the resources managed by the Multi Tenant Operator.
//!
//! # Module Organization
//!
//! - [`tree`]: Untyped object bodies and typed field access
//! - [`extract`]: Normalized name lists and values pulled out of tenants
//! - [`flags`]: Feature flags and the tenant spec filter
//! - [`config`]: The persisted feature flag file
//! - [`cluster`]: Reading objects from the API server
//! - [`render`]: Text, JSON, YAML and name output
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod cluster;
#[cfg(not(any(debug_assertions, test)))]
mod cluster;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod config;
#[cfg(not(any(debug_assertions, test)))]
mod config;

#[cfg(any(debug_assertions, test))]
pub mod extract;
#[cfg(not(any(debug_assertions, test)))]
mod extract;

#[cfg(any(debug_assertions, test))]
pub mod flags;
#[cfg(not(any(debug_assertions, test)))]
mod flags;

#[cfg(any(debug_assertions, test))]
pub mod render;
#[cfg(not(any(debug_assertions, test)))]
mod render;

#[cfg(any(debug_assertions, test))]
pub mod tree;
#[cfg(not(any(debug_assertions, test)))]
mod tree;

pub use crate::cluster::{Cluster, FetchError, ResourceKind};
pub use crate::commands::{Host, run, run_with_cluster};
pub use crate::tree::Attr;
