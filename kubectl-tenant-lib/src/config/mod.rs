//! On-disk feature flag configuration
//!
//! Flags live in a small YAML document under a `featureFlags` key. The file is
//! created on first use so that `config list` always has something to show and
//! `config enable` / `config disable` always have something to update.

mod flag_file;

pub use flag_file::{FlagFile, resolve_config_path};

/// Log target for configuration handling
const LOG_TARGET: &str = "    config";
