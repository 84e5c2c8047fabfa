use super::Host;
use super::common::{TenantViewArgs, emit, fetch_tenant, render_view, tenant_section, write_tenant_header};
use crate::Result;
use crate::cluster::Cluster;
use crate::tree::{Attr, AttrMap};
use core::fmt::Write;

fn generate_text<W: Write>(tenant_name: &str, section: Option<&AttrMap>, writer: &mut W) -> Result<()> {
    write_tenant_header(tenant_name, writer)?;

    let Some(section) = section else {
        writeln!(writer, "No hibernation configuration defined.")?;
        return Ok(());
    };

    if let Some(sleep) = section.get("sleepSchedule").and_then(Attr::as_str) {
        writeln!(writer, "Sleep Schedule (UTC): {sleep}")?;
    }

    if let Some(wake) = section.get("wakeSchedule").and_then(Attr::as_str) {
        writeln!(writer, "Wake Schedule (UTC): {wake}")?;
    }

    Ok(())
}

pub async fn process_hibernation<H: Host, C: Cluster>(host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let section = tenant_section(&tenant, "hibernation");

    let s = render_view(args.output.output, "hibernation", &section.cloned().unwrap_or_default(), |s| {
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
    fn test_schedules() {
        let section = Attr::from(json!({ "sleepSchedule": "0 20 * * 1-5", "wakeSchedule": "0 8 * * 1-5" }));
        assert_eq!(
            render(&section),
            "Tenant: acme\n\nSleep Schedule (UTC): 0 20 * * 1-5\nWake Schedule (UTC): 0 8 * * 1-5\n"
        );
    }

    #[test]
    fn test_only_sleep() {
        let section = Attr::from(json!({ "sleepSchedule": "0 20 * * *" }));
        assert_eq!(render(&section), "Tenant: acme\n\nSleep Schedule (UTC): 0 20 * * *\n");
    }

    #[test]
    fn test_not_configured() {
        assert_eq!(render(&Attr::Null), "Tenant: acme\n\nNo hibernation configuration defined.\n");
    }
}
