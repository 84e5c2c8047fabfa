use super::{ExtractedNames, LOG_TARGET, extract_string_list};
use crate::tree::Attr;

/// Resolve the namespaces a tenant owns from its `spec.namespaces` block.
///
/// The result is the union of:
/// - `withoutTenantPrefix` entries, verbatim
/// - `withTenantPrefix` entries, each as `<tenant>-<entry>`
/// - `<tenant>-sandbox`, only when `sandboxes.enabled` is `true`
#[must_use]
pub fn extract_namespace_names(namespaces: &Attr, tenant_name: &str) -> ExtractedNames {
    let verbatim = extract_string_list(namespaces, &["withoutTenantPrefix"]);

    let prefixed: ExtractedNames = extract_string_list(namespaces, &["withTenantPrefix"])
        .iter()
        .map(|suffix| format!("{tenant_name}-{suffix}"))
        .collect();

    let sandbox = match namespaces.lookup_bool(&["sandboxes", "enabled"]) {
        Ok(true) => Some(format!("{tenant_name}-sandbox")),
        Ok(false) => None,
        Err(e) => {
            if !e.is_absent() {
                log::warn!(target: LOG_TARGET, "{e}, not adding a sandbox namespace");
            }
            None
        }
    };

    verbatim.union(prefixed).union(sandbox.into_iter().collect())
}

/// Resolve the namespaces of a whole Tenant object body.
#[must_use]
pub fn extract_tenant_namespace_names(tenant: &Attr, tenant_name: &str) -> ExtractedNames {
    tenant
        .lookup(&["spec", "namespaces"])
        .map_or_else(|_| ExtractedNames::new(), |namespaces| extract_namespace_names(namespaces, tenant_name))
}
