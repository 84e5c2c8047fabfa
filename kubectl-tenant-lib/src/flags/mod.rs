//! Feature flags and tenant spec filtering
//!
//! A [`FlagRegistry`] maps flag names to `{enabled, source}`. Names without an
//! entry fall back to a fixed policy: storage classes, quota, image registries,
//! ingress classes, service accounts and namespaces are on, everything else is
//! off. [`filter_spec_by_feature_flags`] uses the registry to hide whole
//! top-level sections of a Tenant `spec`.
//!
//! The registry is created once per invocation and passed by reference to
//! whatever needs it.

mod feature;
mod filter;
mod registry;

pub use feature::Feature;
pub use filter::filter_spec_by_feature_flags;
pub use registry::{FeatureFlag, FlagRegistry, SOURCE_CONFIG_FILE, SOURCE_RUNTIME};

/// Log target for feature flags
const LOG_TARGET: &str = "     flags";
