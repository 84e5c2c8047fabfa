use super::{Feature, FlagRegistry, LOG_TARGET};
use crate::tree::Attr;

/// Drop the top-level fields of a Tenant `spec` whose owning feature is disabled.
///
/// Each field is kept or dropped as a whole; nothing below the top level is
/// inspected. Fields no feature owns are always kept, and a `spec` that is not
/// an object is returned unchanged.
#[must_use]
pub fn filter_spec_by_feature_flags(registry: &FlagRegistry, spec: &Attr) -> Attr {
    let Some(fields) = spec.as_object() else {
        return spec.clone();
    };

    let kept = fields
        .iter()
        .filter(|(field, _)| match Feature::for_spec_field(field) {
            Some(feature) if !registry.is_enabled(feature) => {
                log::debug!(target: LOG_TARGET, "Field '{field}' filtered out by feature '{feature}'");
                false
            }
            _ => true,
        })
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect();

    Attr::Object(kept)
}
