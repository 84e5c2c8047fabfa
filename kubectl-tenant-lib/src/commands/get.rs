use super::Host;
use super::common::{GlobalArgs, OutputArgs, emit, ensure_enabled, fetch_tenant};
use crate::Result;
use crate::cluster::{Cluster, ResourceKind};
use crate::extract::{ExtractedNames, extract_names_from_object_list, extract_single_string, extract_string_list, extract_tenant_namespace_names};
use crate::flags::Feature;
use crate::render::{generate_object, generate_objects};
use crate::tree::Attr;
use clap::Parser;
use ohno::bail;

const LOG_TARGET: &str = "       get";

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Resource type: storageclasses, ingressclasses, priorityclasses, resourcequotas or namespaces
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Name of the Tenant
    #[arg(value_name = "TENANT")]
    pub tenant: String,

    /// Show only this object, which must be allowed for the tenant
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Namespace for namespaced resources
    #[arg(short = 'n', long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// A resource type whose allowed names can be read from a Tenant.
struct TenantResource {
    key: &'static str,
    kind: ResourceKind,
    feature: Feature,
    allowed_names: fn(&Attr, &str) -> ExtractedNames,
}

const TENANT_RESOURCES: [TenantResource; 5] = [
    TenantResource {
        key: "ingressclasses",
        kind: ResourceKind::INGRESS_CLASS,
        feature: Feature::IngressClasses,
        allowed_names: ingress_class_names,
    },
    TenantResource {
        key: "namespaces",
        kind: ResourceKind::NAMESPACE,
        feature: Feature::Namespaces,
        allowed_names: extract_tenant_namespace_names,
    },
    TenantResource {
        key: "priorityclasses",
        kind: ResourceKind::PRIORITY_CLASS,
        feature: Feature::PodPriorityClasses,
        allowed_names: priority_class_names,
    },
    TenantResource {
        key: "resourcequotas",
        kind: ResourceKind::RESOURCE_QUOTA,
        feature: Feature::Quota,
        allowed_names: resource_quota_names,
    },
    TenantResource {
        key: "storageclasses",
        kind: ResourceKind::STORAGE_CLASS,
        feature: Feature::StorageClasses,
        allowed_names: storage_class_names,
    },
];

fn storage_class_names(tenant: &Attr, _tenant_name: &str) -> ExtractedNames {
    extract_names_from_object_list(tenant, &["status", "storageClasses", "available"], "name")
}

fn ingress_class_names(tenant: &Attr, _tenant_name: &str) -> ExtractedNames {
    extract_string_list(tenant, &["spec", "ingressClasses", "allowed"])
}

fn priority_class_names(tenant: &Attr, _tenant_name: &str) -> ExtractedNames {
    extract_string_list(tenant, &["spec", "podPriorityClasses", "allowed"])
}

fn resource_quota_names(tenant: &Attr, _tenant_name: &str) -> ExtractedNames {
    match extract_single_string(tenant, &["spec", "quota"]) {
        Ok(quota) => quota.into_iter().collect(),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "{e}, no resource quotas are allowed");
            ExtractedNames::new()
        }
    }
}

fn supported_keys() -> String {
    TENANT_RESOURCES.iter().map(|r| r.key).collect::<Vec<_>>().join(", ")
}

pub async fn process_get<H: Host, C: Cluster>(host: &mut H, global: &GlobalArgs, args: &GetArgs, cluster: &C) -> Result<()> {
    let key = args.resource.to_ascii_lowercase();
    let Some(resource) = TENANT_RESOURCES.iter().find(|r| r.key == key) else {
        bail!("unsupported resource \"{key}\"; supported: {}", supported_keys());
    };

    let namespace = args.namespace.as_deref();
    if resource.kind.namespaced && namespace.is_none() {
        bail!("namespaced resource requested but no namespace provided; pass -n");
    }

    let (_, registry) = global.load_flags(host)?;
    ensure_enabled(&registry, resource.feature)?;

    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let allowed = (resource.allowed_names)(&tenant, &args.tenant);

    log::info!(
        target: LOG_TARGET,
        "Tenant '{}' allows {} {}: {allowed}",
        args.tenant,
        allowed.len(),
        resource.key
    );

    let mut s = String::new();

    if let Some(name) = &args.name {
        if !allowed.contains(name) {
            bail!("{} \"{name}\" is not permitted for tenant \"{}\"", resource.kind, args.tenant);
        }

        let object = cluster
            .fetch(&resource.kind, name, namespace)
            .await
            .map_err(|e| e.into_app_err_for(&resource.kind, name))?;

        generate_object(args.output.output, &resource.kind, &object, &mut s)?;
    } else {
        let mut items = Vec::with_capacity(allowed.len());
        for name in &allowed {
            match cluster.fetch(&resource.kind, name, namespace).await {
                Ok(object) => items.push(object),
                Err(e) if e.is_not_found() => {
                    log::warn!(target: LOG_TARGET, "{} '{name}' is allowed for tenant '{}' but does not exist, skipping", resource.kind, args.tenant);
                }
                Err(e) => return Err(e.into_app_err_for(&resource.kind, name)),
            }
        }

        generate_objects(args.output.output, &resource.kind, &items, &mut s)?;
    }

    emit(host, &s);
    Ok(())
}
