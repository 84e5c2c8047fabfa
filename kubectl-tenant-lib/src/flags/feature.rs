use strsim::normalized_damerau_levenshtein;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Minimum similarity for a known feature to be offered as a suggestion
const MIN_SUGGESTION_SCORE: f64 = 0.7;

/// The tenant features the plugin knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Feature {
    Hibernation,
    HostValidation,
    PodPriorityClasses,
    ServiceAccounts,
    ImageRegistries,
    IngressClasses,
    Namespaces,
    AccessControl,
    StorageClasses,
    Quota,
}

/// Which feature owns each top-level field of a Tenant `spec`.
///
/// Fields missing from this table are shown regardless of any flag.
const SPEC_FIELD_FEATURES: [(&str, Feature); 8] = [
    ("hibernation", Feature::Hibernation),
    ("hostValidationConfig", Feature::HostValidation),
    ("podPriorityClasses", Feature::PodPriorityClasses),
    ("serviceAccounts", Feature::ServiceAccounts),
    ("imageRegistries", Feature::ImageRegistries),
    ("ingressClasses", Feature::IngressClasses),
    ("namespaces", Feature::Namespaces),
    ("accessControl", Feature::AccessControl),
];

impl Feature {
    /// Whether the feature is on when the registry has no entry for it.
    #[must_use]
    pub const fn enabled_by_default(self) -> bool {
        match self {
            Self::StorageClasses | Self::Quota | Self::ImageRegistries | Self::IngressClasses | Self::ServiceAccounts | Self::Namespaces => {
                true
            }
            Self::Hibernation | Self::HostValidation | Self::PodPriorityClasses | Self::AccessControl => false,
        }
    }

    /// The feature owning a top-level `spec` field, if any.
    #[must_use]
    pub fn for_spec_field(field: &str) -> Option<Self> {
        SPEC_FIELD_FEATURES.iter().find(|(name, _)| *name == field).map(|(_, feature)| *feature)
    }

    /// Every feature that owns a top-level `spec` field.
    pub fn spec_field_features() -> impl Iterator<Item = Self> {
        SPEC_FIELD_FEATURES.iter().map(|(_, feature)| *feature)
    }

    /// The feature whose flag name is exactly `name`, case included.
    #[must_use]
    pub fn from_flag_name(name: &str) -> Option<Self> {
        match name {
            "hibernation" => Some(Self::Hibernation),
            "hostValidation" => Some(Self::HostValidation),
            "podPriorityClasses" => Some(Self::PodPriorityClasses),
            "serviceAccounts" => Some(Self::ServiceAccounts),
            "imageRegistries" => Some(Self::ImageRegistries),
            "ingressClasses" => Some(Self::IngressClasses),
            "namespaces" => Some(Self::Namespaces),
            "accessControl" => Some(Self::AccessControl),
            "storageClasses" => Some(Self::StorageClasses),
            "quota" => Some(Self::Quota),
            _ => None,
        }
    }

    /// Closest known feature to a misspelt name.
    #[must_use]
    pub fn suggest(input: &str) -> Option<Self> {
        let input = input.to_ascii_lowercase();
        Self::iter()
            .map(|feature| (feature, normalized_damerau_levenshtein(&input, &feature.as_ref().to_ascii_lowercase())))
            .filter(|(_, score)| *score >= MIN_SUGGESTION_SCORE)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(feature, _)| feature)
    }
}

/// Default for a flag name, whether or not it names a known feature.
#[must_use]
pub fn default_for(name: &str) -> bool {
    Feature::from_flag_name(name).is_some_and(Feature::enabled_by_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_names_are_camel_case() {
        assert_eq!(Feature::HostValidation.to_string(), "hostValidation");
        assert_eq!(Feature::PodPriorityClasses.as_ref(), "podPriorityClasses");
        assert_eq!(Feature::Quota.as_ref(), "quota");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Feature::from_str("hostvalidation"), Ok(Feature::HostValidation));
        assert_eq!(Feature::from_str("StorageClasses"), Ok(Feature::StorageClasses));
        assert!(Feature::from_str("bogus").is_err());
    }

    #[test]
    fn test_default_split() {
        for feature in [
            Feature::StorageClasses,
            Feature::Quota,
            Feature::ImageRegistries,
            Feature::IngressClasses,
            Feature::ServiceAccounts,
            Feature::Namespaces,
        ] {
            assert!(feature.enabled_by_default(), "{feature} should default to enabled");
        }

        for feature in [Feature::Hibernation, Feature::HostValidation, Feature::PodPriorityClasses, Feature::AccessControl] {
            assert!(!feature.enabled_by_default(), "{feature} should default to disabled");
        }
    }

    #[test]
    fn test_default_for_unknown_name() {
        assert!(default_for("namespaces"));
        assert!(!default_for("hibernation"));
        assert!(!default_for("somethingElse"));
        assert!(!default_for("Namespaces"));
    }

    #[test]
    fn test_flag_names_match_display_exactly() {
        for feature in Feature::iter() {
            assert_eq!(Feature::from_flag_name(feature.as_ref()), Some(feature));
        }
        assert_eq!(Feature::from_flag_name("Quota"), None);
        assert_eq!(Feature::from_flag_name("hostvalidation"), None);
    }

    #[test]
    fn test_spec_field_features() {
        let features: Vec<_> = Feature::spec_field_features().collect();
        assert_eq!(features.len(), 8);
        assert!(features.contains(&Feature::Hibernation));
        assert!(features.contains(&Feature::AccessControl));
        assert!(!features.contains(&Feature::Quota));
        assert!(!features.contains(&Feature::StorageClasses));
    }

    #[test]
    fn test_spec_field_table() {
        assert_eq!(Feature::for_spec_field("hostValidationConfig"), Some(Feature::HostValidation));
        assert_eq!(Feature::for_spec_field("hibernation"), Some(Feature::Hibernation));
        assert_eq!(Feature::for_spec_field("accessControl"), Some(Feature::AccessControl));
        assert_eq!(Feature::for_spec_field("quota"), None);
        assert_eq!(Feature::for_spec_field("storageClasses"), None);
    }

    #[test]
    fn test_suggest() {
        assert_eq!(Feature::suggest("hibernaton"), Some(Feature::Hibernation));
        assert_eq!(Feature::suggest("quta"), Some(Feature::Quota));
        assert_eq!(Feature::suggest("zzzzzzzz"), None);
    }
}
