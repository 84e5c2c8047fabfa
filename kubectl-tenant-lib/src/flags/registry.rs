use super::feature::default_for;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Source recorded for flags changed through [`FlagRegistry::enable`] or [`FlagRegistry::disable`]
pub const SOURCE_RUNTIME: &str = "runtime";

/// Source recorded for flags loaded from a configuration file that did not carry one
pub const SOURCE_CONFIG_FILE: &str = "config-file";

/// The state of a single feature flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub enabled: bool,

    /// Where the value came from; informational only
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

/// Feature flags keyed by name, with a fixed default for names that have no entry.
///
/// Readers share the lock and writers exclude everyone else, so a read never
/// observes a half-applied update.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    flags: RwLock<BTreeMap<String, FeatureFlag>>,
}

impl FlagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_flags(flags: BTreeMap<String, FeatureFlag>) -> Self {
        Self { flags: RwLock::new(flags) }
    }

    /// Whether `name` is enabled, falling back to the built-in default when it has no entry.
    #[must_use]
    pub fn is_enabled(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.flags
            .read()
            .expect("lock not poisoned")
            .get(name)
            .map_or_else(|| default_for(name), |flag| flag.enabled)
    }

    pub fn enable(&self, name: impl AsRef<str>) {
        self.set(name.as_ref(), true);
    }

    pub fn disable(&self, name: impl AsRef<str>) {
        self.set(name.as_ref(), false);
    }

    /// The explicit entry for `name`, if there is one.
    #[must_use]
    pub fn flag(&self, name: impl AsRef<str>) -> Option<FeatureFlag> {
        self.flags.read().expect("lock not poisoned").get(name.as_ref()).cloned()
    }

    /// Copy of every explicit entry, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, FeatureFlag> {
        self.flags.read().expect("lock not poisoned").clone()
    }

    fn set(&self, name: &str, enabled: bool) {
        log::debug!(target: super::LOG_TARGET, "Setting feature '{name}' to {}", if enabled { "enabled" } else { "disabled" });

        let _ = self.flags.write().expect("lock not poisoned").insert(
            name.to_string(),
            FeatureFlag {
                enabled,
                source: SOURCE_RUNTIME.to_string(),
            },
        );
    }
}
