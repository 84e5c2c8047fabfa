use super::Host;
use super::common::{TenantViewArgs, emit, fetch_tenant};
use crate::Result;
use crate::cluster::{Cluster, ResourceKind};
use crate::extract::extract_single_string;
use crate::render::{OutputFormat, generate_object, generate_tree};
use crate::tree::Attr;
use core::fmt::Write;
use ohno::{app_err, bail};

/// The Quota a tenant references through `spec.quota`.
fn quota_name(tenant: &Attr, tenant_name: &str) -> Result<String> {
    match extract_single_string(tenant, &["spec", "quota"]) {
        Ok(Some(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Ok(_) => bail!("tenant \"{tenant_name}\" has no spec.quota defined"),
        Err(e) => Err(app_err!("tenant \"{tenant_name}\" has a malformed quota: {e}")),
    }
}

fn generate_text<W: Write>(tenant_name: &str, quota_name: &str, spec: &Attr, writer: &mut W) -> Result<()> {
    writeln!(writer, "Tenant: {tenant_name}")?;
    writeln!(writer, "Quota Name: {quota_name}")?;
    writeln!(writer)?;
    writeln!(writer, "Quota Spec:")?;
    generate_tree(spec, 2, writer)
}

pub async fn process_quota<H: Host, C: Cluster>(host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
    let tenant = fetch_tenant(cluster, &args.tenant).await?;
    let name = quota_name(&tenant, &args.tenant)?;

    let quota = cluster
        .fetch(&ResourceKind::QUOTA, &name, None)
        .await
        .map_err(|e| e.into_app_err_for(&ResourceKind::QUOTA, &name))?;

    let mut s = String::new();
    match args.output.output {
        OutputFormat::Text => {
            let Ok(spec) = quota.lookup(&["spec"]) else {
                bail!("quota \"{name}\" has no spec");
            };
            generate_text(&args.tenant, &name, spec, &mut s)?;
        }
        format => generate_object(format, &ResourceKind::QUOTA, &quota, &mut s)?,
    }

    emit(host, &s);
    Ok(())
}
