use core::fmt;
use k8s_openapi::api::core::v1::{Namespace, ResourceQuota};
use k8s_openapi::api::networking::v1::IngressClass;
use k8s_openapi::api::scheduling::v1::PriorityClass;
use k8s_openapi::api::storage::v1::StorageClass;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

const TENANT_GROUP: &str = "tenantoperator.stakater.com";

/// Everything needed to address one resource type on the API server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// API group; empty for the core group
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub plural: &'static str,
    pub namespaced: bool,
}

impl ResourceKind {
    pub const TENANT: Self = Self {
        group: TENANT_GROUP,
        version: "v1beta3",
        kind: "Tenant",
        plural: "tenants",
        namespaced: false,
    };

    pub const QUOTA: Self = Self {
        group: TENANT_GROUP,
        version: "v1beta1",
        kind: "Quota",
        plural: "quotas",
        namespaced: false,
    };

    pub const STORAGE_CLASS: Self = Self::builtin::<StorageClass>(false);
    pub const INGRESS_CLASS: Self = Self::builtin::<IngressClass>(false);
    pub const PRIORITY_CLASS: Self = Self::builtin::<PriorityClass>(false);
    pub const RESOURCE_QUOTA: Self = Self::builtin::<ResourceQuota>(true);
    pub const NAMESPACE: Self = Self::builtin::<Namespace>(false);
    pub const CUSTOM_RESOURCE_DEFINITION: Self = Self::builtin::<CustomResourceDefinition>(false);

    const fn builtin<K: k8s_openapi::Resource>(namespaced: bool) -> Self {
        Self {
            group: K::GROUP,
            version: K::VERSION,
            kind: K::KIND,
            plural: K::URL_PATH_SEGMENT,
            namespaced,
        }
    }

    /// `group/version`, or just `version` for the core group.
    #[must_use]
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.to_string()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// `plural.group`, the name of the CRD that defines a custom kind.
    #[must_use]
    pub fn qualified_plural(&self) -> String {
        if self.group.is_empty() {
            self.plural.to_string()
        } else {
            format!("{}.{}", self.plural, self.group)
        }
    }

    /// `<plural>.<group>/<name>`, the form `kubectl get -o name` prints.
    #[must_use]
    pub fn object_reference(&self, name: &str) -> String {
        format!("{}/{name}", self.qualified_plural())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_kinds() {
        assert_eq!(ResourceKind::TENANT.api_version(), "tenantoperator.stakater.com/v1beta3");
        assert_eq!(ResourceKind::QUOTA.api_version(), "tenantoperator.stakater.com/v1beta1");
        assert_eq!(ResourceKind::TENANT.qualified_plural(), "tenants.tenantoperator.stakater.com");
    }

    #[test]
    fn test_builtin_kinds() {
        assert_eq!(ResourceKind::STORAGE_CLASS.api_version(), "storage.k8s.io/v1");
        assert_eq!(ResourceKind::STORAGE_CLASS.plural, "storageclasses");
        assert_eq!(ResourceKind::INGRESS_CLASS.api_version(), "networking.k8s.io/v1");
        assert_eq!(ResourceKind::PRIORITY_CLASS.api_version(), "scheduling.k8s.io/v1");
        assert_eq!(ResourceKind::RESOURCE_QUOTA.api_version(), "v1");
        assert!(ResourceKind::RESOURCE_QUOTA.namespaced);
        assert_eq!(ResourceKind::CUSTOM_RESOURCE_DEFINITION.kind, "CustomResourceDefinition");
    }

    #[test]
    fn test_object_reference() {
        assert_eq!(
            ResourceKind::STORAGE_CLASS.object_reference("gp2"),
            "storageclasses.storage.k8s.io/gp2"
        );
        assert_eq!(ResourceKind::NAMESPACE.object_reference("acme-dev"), "namespaces/acme-dev");
    }

    #[test]
    fn test_display_is_kind() {
        assert_eq!(ResourceKind::TENANT.to_string(), "Tenant");
    }
}
