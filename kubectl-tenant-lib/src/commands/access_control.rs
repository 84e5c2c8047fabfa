use super::Host;
use super::common::{
    TenantViewArgs, emit, fetch_tenant, render_view, strings_at, tenant_section, write_bullets,
    write_tenant_header,
};
use crate::Result;
use crate::cluster::Cluster;
use crate::tree::{Attr, AttrMap};
use core::fmt::Write;

const ROLES: [(&str, &str); 3] = [("owners", "Owners"), ("editors", "Editors"), ("viewers", "Viewers")];

fn generate_text<W: Write>(tenant_name: &str, section: Option<&AttrMap>, writer: &mut W) -> Result<()> {
    write_tenant_header(tenant_name, writer)?;

    let Some(section) = section else {
        writeln!(writer, "No access control configuration defined.")?;
        return Ok(());
    };

    for (key, title) in ROLES {
        if let Some(role) = section.get(key).and_then(Attr::as_object) {
            writeln!(writer, "{title}:")?;
            write_bullets("Users:", 2, strings_at(role, "users"), writer)?;
            write_bullets("Groups:", 2, strings_at(role, "groups"), writer)?;
        }
    }

    Ok(())
}

pub async fn process_access_control<H: Host, C: Cluster>(host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let section = tenant_section(&tenant, "accessControl");

    let s = render_view(args.output.output, "access-control", &section.cloned().unwrap_or_default(), |s| {
        generate_text(&args.tenant, section, s)
    })?;

    emit(host, &s);
    Ok(())
}
