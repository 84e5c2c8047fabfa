use super::Host;
use super::common::{
    TenantViewArgs, emit, fetch_tenant, render_view, strings_at, tenant_section, write_bullets,
    write_tenant_header,
};
use crate::Result;
use crate::cluster::Cluster;
use crate::extract::{ExtractedNames, extract_tenant_namespace_names};
use crate::tree::{Attr, AttrMap};
use core::fmt::Write;
use serde::Serialize;

/// What `-o json` and `-o yaml` print for this view.
#[derive(Debug, Serialize)]
struct NamespacesReport<'a> {
    tenant: &'a str,
    namespaces: ExtractedNames,
    config: AttrMap,
}

fn write_labels_and_annotations<W: Write>(template: &AttrMap, indent: usize, writer: &mut W) -> Result<()> {
    let pad = " ".repeat(indent);

    for (key, title) in [("labels", "Labels:"), ("annotations", "Annotations:")] {
        let Some(entries) = template.get(key).and_then(Attr::as_object).filter(|m| !m.is_empty()) else {
            continue;
        };

        writeln!(writer, "{pad}{title}")?;
        for (name, value) in entries {
            if let Some(value) = value.as_str() {
                writeln!(writer, "{pad}  {name}: {value}")?;
            }
        }
    }

    Ok(())
}

fn write_metadata_templates<W: Write>(metadata: &AttrMap, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Metadata Templates:")?;

    if let Some(common) = metadata.get("common").and_then(Attr::as_object) {
        writeln!(writer, "  Common:")?;
        write_labels_and_annotations(common, 4, writer)?;
    }

    if let Some(sandbox) = metadata.get("sandbox").and_then(Attr::as_object) {
        writeln!(writer, "  Sandbox:")?;
        write_labels_and_annotations(sandbox, 4, writer)?;
    }

    let specific = metadata.get("specific").and_then(Attr::as_array).unwrap_or_default();
    if !specific.is_empty() {
        writeln!(writer, "  Specific:")?;
        for (index, template) in specific.iter().enumerate() {
            let Some(template) = template.as_object() else {
                continue;
            };

            writeln!(writer, "    #{}:", index + 1)?;
            if template.get("namespaces").and_then(Attr::as_array).is_some() {
                writeln!(writer, "      Namespaces:")?;
                for namespace in strings_at(template, "namespaces") {
                    writeln!(writer, "        - {namespace}")?;
                }
            }
            write_labels_and_annotations(template, 6, writer)?;
        }
    }

    Ok(())
}

fn generate_text<W: Write>(tenant_name: &str, section: Option<&AttrMap>, resolved: &ExtractedNames, writer: &mut W) -> Result<()> {
    write_tenant_header(tenant_name, writer)?;

    let Some(section) = section else {
        writeln!(writer, "No namespace configuration defined.")?;
        return Ok(());
    };

    if let Some(sandboxes) = section.get("sandboxes").and_then(Attr::as_object) {
        writeln!(writer, "Sandboxes:")?;
        if let Some(enabled) = sandboxes.get("enabled").and_then(Attr::as_bool) {
            writeln!(writer, "  Enabled: {enabled}")?;
        }
        if let Some(private) = sandboxes.get("private").and_then(Attr::as_bool) {
            writeln!(writer, "  Private: {private}")?;
        }
    }

    if let Some(purge) = section.get("onDeletePurgeNamespaces").and_then(Attr::as_bool) {
        writeln!(writer)?;
        writeln!(writer, "On Delete Purge Namespaces: {purge}")?;
    }

    let without_prefix: Vec<_> = strings_at(section, "withoutTenantPrefix").collect();
    if !without_prefix.is_empty() {
        writeln!(writer)?;
        write_bullets("Namespaces Without Tenant Prefix:", 0, without_prefix, writer)?;
    }

    let with_prefix: Vec<_> = strings_at(section, "withTenantPrefix").collect();
    if !with_prefix.is_empty() {
        writeln!(writer)?;
        write_bullets("Namespace Prefixes (will be prepended with tenant name):", 0, with_prefix, writer)?;
    }

    if let Some(metadata) = section.get("metadata").and_then(Attr::as_object) {
        write_metadata_templates(metadata, writer)?;
    }

    if !resolved.is_empty() {
        writeln!(writer)?;
        write_bullets("Tenant Namespaces:", 0, resolved, writer)?;
    }

    Ok(())
}

pub async fn process_namespaces<H: Host, C: Cluster>(host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let section = tenant_section(&tenant, "namespaces");

    let resolved = extract_tenant_namespace_names(&tenant, &args.tenant);

    let report = NamespacesReport {
        tenant: &args.tenant,
        namespaces: resolved.clone(),
        config: section.cloned().unwrap_or_default(),
    };

    let s = render_view(args.output.output, "namespaces", &report, |s| {
        generate_text(&args.tenant, section, &resolved, s)
    })?;

    emit(host, &s);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_namespace_names;
    use serde_json::json;

    fn render(section: &Attr) -> String {
        let resolved = extract_namespace_names(section, "acme");
        let mut s = String::new();
        generate_text("acme", section.as_object(), &resolved, &mut s).unwrap();
        s
    }

    #[test]
    fn test_full_config() {
        let section = Attr::from(json!({
            "sandboxes": { "enabled": true, "private": false },
            "onDeletePurgeNamespaces": true,
            "withoutTenantPrefix": ["analytics"],
            "withTenantPrefix": ["dev", "build"],
            "metadata": {
                "common": {
                    "labels": { "team": "acme", "cost-center": "42" }
                },
                "sandbox": {
                    "annotations": { "owner": "acme" }
                },
                "specific": [
                    {
                        "namespaces": ["acme-dev"],
                        "labels": { "stage": "dev" }
                    }
                ]
            }
        }));

        let expected = "\
Tenant: acme

Sandboxes:
  Enabled: true
  Private: false

On Delete Purge Namespaces: true

Namespaces Without Tenant Prefix:
  - analytics

Namespace Prefixes (will be prepended with tenant name):
  - dev
  - build

Metadata Templates:
  Common:
    Labels:
      cost-center: 42
      team: acme
  Sandbox:
    Annotations:
      owner: acme
  Specific:
    #1:
      Namespaces:
        - acme-dev
      Labels:
        stage: dev

Tenant Namespaces:
  - acme-build
  - acme-dev
  - acme-sandbox
  - analytics
";
        assert_eq!(render(&section), expected);
    }

    #[test]
    fn test_prefix_only() {
        let section = Attr::from(json!({ "withTenantPrefix": ["dev"] }));
        let expected = "\
Tenant: acme


Namespace Prefixes (will be prepended with tenant name):
  - dev

Tenant Namespaces:
  - acme-dev
";
        assert_eq!(render(&section), expected);
    }

    #[test]
    fn test_not_configured() {
        assert_eq!(render(&Attr::Null), "Tenant: acme\n\nNo namespace configuration defined.\n");
    }
}
