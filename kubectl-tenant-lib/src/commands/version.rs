use super::Host;
use super::common::emit;
use crate::Result;
use crate::cluster::{Cluster, ResourceKind};
use crate::tree::Attr;
use core::fmt::Write;

/// Name of the CustomResourceDefinition installed by the operator
const TENANT_CRD: &str = "tenants.tenantoperator.stakater.com";

const BUILD_DATE: &str = match option_env!("KUBECTL_TENANT_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

const GIT_COMMIT: &str = match option_env!("KUBECTL_TENANT_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Best description of the operator version that a Tenant CRD carries.
fn operator_version(crd: &Attr) -> String {
    let metadata = crd.get("metadata");

    if let Some(version) = metadata.and_then(|m| m.get("labels")).and_then(|l| l.get("app.kubernetes.io/version")).and_then(Attr::as_str) {
        return version.to_string();
    }

    if let Some(version) = metadata.and_then(|m| m.get("annotations")).and_then(|a| a.get("operator.version")).and_then(Attr::as_str) {
        return version.to_string();
    }

    match metadata.and_then(|m| m.get("creationTimestamp")).and_then(Attr::as_str) {
        Some(created) => {
            let date = created.split_once('T').map_or(created, |(date, _)| date);
            format!("CRD installed (created: {date})")
        }
        None => "CRD installed".to_string(),
    }
}

async fn detect_operator_version<C: Cluster>(cluster: &C) -> String {
    match cluster.fetch(&ResourceKind::CUSTOM_RESOURCE_DEFINITION, TENANT_CRD, None).await {
        Ok(crd) => operator_version(&crd),
        Err(e) => {
            log::debug!(target: super::LOG_TARGET, "could not read CRD '{TENANT_CRD}': {e}");
            format!("not detected ({e})")
        }
    }
}

/// Print version information, including the operator version when a cluster is reachable.
pub async fn process_version<H: Host, C: Cluster>(host: &mut H, cluster: Option<&C>) -> Result<()> {
    let mut s = String::new();
    writeln!(s, "CLI Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(s, "Build Date: {BUILD_DATE}")?;
    writeln!(s, "Git Commit: {GIT_COMMIT}")?;

    let operator = match cluster {
        Some(cluster) => detect_operator_version(cluster).await,
        None => "not detected (no cluster connection)".to_string(),
    };
    writeln!(s, "Operator Version: {operator}")?;

    emit(host, &s);
    Ok(())
}
