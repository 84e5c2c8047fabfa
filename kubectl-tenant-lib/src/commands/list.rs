use super::Host;
use super::common::{GlobalArgs, OutputArgs, emit};
use crate::Result;
use crate::cluster::{Cluster, ResourceKind};
use crate::flags::{Feature, FlagRegistry, filter_spec_by_feature_flags};
use crate::render::{OutputFormat, generate_objects, generate_tree};
use crate::tree::Attr;
use clap::Parser;
use core::fmt::Write;

const SEPARATOR_WIDTH: usize = 60;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Hide spec fields of features disabled in the flag file
    #[arg(long)]
    pub respect_flags: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Registry that keeps every feature-owned `spec` field.
fn show_all_registry() -> FlagRegistry {
    let registry = FlagRegistry::new();
    for feature in Feature::spec_field_features() {
        registry.enable(feature);
    }
    registry
}

/// Replace the `spec` of a Tenant with its feature-filtered version.
fn filter_tenant(registry: &FlagRegistry, mut tenant: Attr) -> Attr {
    if let Attr::Object(fields) = &mut tenant
        && let Some(spec) = fields.get_mut("spec")
    {
        *spec = filter_spec_by_feature_flags(registry, spec);
    }
    tenant
}

fn generate_text<W: Write>(tenants: &[Attr], writer: &mut W) -> Result<()> {
    if tenants.is_empty() {
        writeln!(writer, "No Tenant resources found.")?;
        return Ok(());
    }

    writeln!(writer, "Found {} Tenant(s):", tenants.len())?;
    writeln!(writer)?;

    for tenant in tenants {
        writeln!(writer, "Name: {}", tenant.name().unwrap_or_default())?;
        if let Some(namespace) = tenant.namespace() {
            writeln!(writer, "Namespace: {namespace}")?;
        }
        writeln!(writer, "API Version: {}", tenant.api_version().unwrap_or_default())?;
        writeln!(writer, "Kind: {}", tenant.object_kind().unwrap_or_default())?;

        match tenant.lookup(&["spec"]) {
            Ok(spec) => {
                writeln!(writer, "Spec:")?;
                generate_tree(spec, 2, writer)?;
            }
            Err(_) => writeln!(writer, "Spec: not set")?,
        }

        writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(writer)?;
    }

    Ok(())
}

pub async fn process_list<H: Host, C: Cluster>(host: &mut H, global: &GlobalArgs, args: &ListArgs, cluster: &C) -> Result<()> {
    let registry = if args.respect_flags {
        global.load_flags(host)?.1
    } else {
        show_all_registry()
    };

    let tenants: Vec<Attr> = cluster
        .list(&ResourceKind::TENANT)
        .await
        .map_err(|e| e.into_app_err_for_list(&ResourceKind::TENANT))?
        .into_iter()
        .map(|tenant| filter_tenant(&registry, tenant))
        .collect();

    let mut s = String::new();
    match args.output.output {
        OutputFormat::Text => generate_text(&tenants, &mut s)?,
        format => generate_objects(format, &ResourceKind::TENANT, &tenants, &mut s)?,
    }

    emit(host, &s);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tenant(name: &str) -> Attr {
        Attr::from(json!({
            "apiVersion": "tenantoperator.stakater.com/v1beta3",
            "kind": "Tenant",
            "metadata": { "name": name },
            "spec": {
                "quota": "small",
                "hibernation": { "sleepSchedule": "0 20 * * *" },
                "accessControl": { "owners": { "users": ["alice"] } }
            }
        }))
    }

    #[test]
    fn test_filter_tenant_only_touches_spec() {
        let registry = FlagRegistry::new();
        let filtered = filter_tenant(&registry, tenant("acme"));
        assert_eq!(filtered.name(), Some("acme"));
        assert!(filtered.lookup(&["spec", "quota"]).is_ok());
        assert!(filtered.lookup(&["spec", "hibernation"]).unwrap_err().is_absent());

        registry.enable(Feature::Hibernation);
        let filtered = filter_tenant(&registry, tenant("acme"));
        assert!(filtered.lookup(&["spec", "hibernation"]).is_ok());
    }

    #[test]
    fn test_filter_tenant_without_spec() {
        let bare = Attr::from(json!({ "metadata": { "name": "bare" } }));
        assert_eq!(filter_tenant(&FlagRegistry::new(), bare.clone()), bare);
    }

    #[test]
    fn test_show_all_registry_keeps_every_section() {
        let filtered = filter_tenant(&show_all_registry(), tenant("acme"));
        assert!(filtered.lookup(&["spec", "hibernation"]).is_ok());
        assert!(filtered.lookup(&["spec", "accessControl"]).is_ok());
        assert!(filtered.lookup(&["spec", "quota"]).is_ok());
    }

    #[test]
    fn test_text_output() {
        let mut s = String::new();
        generate_text(&[filter_tenant(&show_all_registry(), tenant("acme"))], &mut s).unwrap();

        let expected = format!(
            "Found 1 Tenant(s):\n\nName: acme\nAPI Version: tenantoperator.stakater.com/v1beta3\nKind: Tenant\nSpec:\n  \
             accessControl:\n    owners:\n      users:\n        - alice\n  \
             hibernation:\n    sleepSchedule: 0 20 * * *\n  \
             quota: small\n{}\n\n",
            "-".repeat(60)
        );
        assert_eq!(s, expected);
    }

    #[test]
    fn test_text_output_with_default_flags() {
        let mut s = String::new();
        generate_text(&[filter_tenant(&FlagRegistry::new(), tenant("acme"))], &mut s).unwrap();
        assert!(s.contains("Spec:\n  quota: small\n"), "{s}");
        assert!(!s.contains("hibernation"), "{s}");
    }

    #[test]
    fn test_text_output_empty() {
        let mut s = String::new();
        generate_text(&[], &mut s).unwrap();
        assert_eq!(s, "No Tenant resources found.\n");
    }
}
