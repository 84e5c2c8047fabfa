use super::Host;
use super::common::{
    TenantViewArgs, emit, fetch_tenant, render_view, strings_at, tenant_section, write_bullets,
    write_tenant_header,
};
use crate::Result;
use crate::cluster::Cluster;
use crate::tree::{Attr, AttrMap};
use core::fmt::Write;

fn generate_text<W: Write>(tenant_name: &str, section: Option<&AttrMap>, writer: &mut W) -> Result<()> {
    write_tenant_header(tenant_name, writer)?;

    let Some(section) = section else {
        writeln!(writer, "No host validation configuration defined.")?;
        return Ok(());
    };

    write_bullets("Allowed Hosts:", 0, strings_at(section, "allowed"), writer)?;

    if let Some(regex) = section.get("allowedRegex").and_then(Attr::as_str) {
        writeln!(writer)?;
        writeln!(writer, "Allowed Regex Pattern: {regex}")?;
    }

    if let Some(deny) = section.get("denyWildcards").and_then(Attr::as_bool) {
        writeln!(writer)?;
        writeln!(writer, "Deny Wildcards: {deny}")?;
    }

    Ok(())
}

pub async fn process_host_validation<H: Host, C: Cluster>(host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let section = tenant_section(&tenant, "hostValidationConfig");

    let s = render_view(args.output.output, "host-validation", &section.cloned().unwrap_or_default(), |s| {
        generate_text(&args.tenant, section, s)
    })?;

    emit(host, &s);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(section: &Attr) -> String {
        let mut s = String::new();
        generate_text("acme", section.as_object(), &mut s).unwrap();
        s
    }

    #[test]
    fn test_full_config() {
        let section = Attr::from(json!({
            "allowed": ["acme.example.com", "api.acme.example.com"],
            "allowedRegex": "^.*\\.acme\\.example\\.com$",
            "denyWildcards": true
        }));

        let expected = "\
Tenant: acme

Allowed Hosts:
  - acme.example.com
  - api.acme.example.com

Allowed Regex Pattern: ^.*\\.acme\\.example\\.com$

Deny Wildcards: true
";
        assert_eq!(render(&section), expected);
    }

    #[test]
    fn test_non_string_hosts_are_skipped() {
        let section = Attr::from(json!({ "allowed": [42, "acme.example.com"] }));
        assert_eq!(render(&section), "Tenant: acme\n\nAllowed Hosts:\n  - acme.example.com\n");
    }

    #[test]
    fn test_not_configured() {
        assert_eq!(render(&Attr::Null), "Tenant: acme\n\nNo host validation configuration defined.\n");
    }
}
