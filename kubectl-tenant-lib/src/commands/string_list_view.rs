use super::Host;
use super::common::{TenantViewArgs, emit, fetch_tenant, render_view, write_bullets, write_tenant_header};
use crate::Result;
use crate::cluster::Cluster;
use crate::extract::{ExtractedNames, extract_string_list};
use crate::tree::Attr;
use core::fmt::Write;

/// A view that prints one list of strings from a Tenant.
#[derive(Debug)]
pub struct StringListView {
    pub command: &'static str,
    pub path: &'static [&'static str],
    pub heading: &'static str,
    pub empty: &'static str,
}

pub const IMAGE_REGISTRIES: StringListView = StringListView {
    command: "image-registries",
    path: &["spec", "imageRegistries", "allowed"],
    heading: "Allowed Image Registries:",
    empty: "No image registries configured.",
};

pub const SERVICE_ACCOUNTS: StringListView = StringListView {
    command: "service-accounts",
    path: &["spec", "serviceAccounts", "denied"],
    heading: "Denied Service Accounts:",
    empty: "No service accounts denied.",
};

impl StringListView {
    fn entries(&self, tenant: &Attr) -> ExtractedNames {
        extract_string_list(tenant, self.path)
    }

    fn generate_text<W: Write>(&self, tenant_name: &str, entries: &ExtractedNames, writer: &mut W) -> Result<()> {
        write_tenant_header(tenant_name, writer)?;

        if entries.is_empty() {
            writeln!(writer, "{}", self.empty)?;
            return Ok(());
        }

        write_bullets(self.heading, 0, entries, writer)
    }

    pub async fn process<H: Host, C: Cluster>(&self, host: &mut H, args: &TenantViewArgs, cluster: &C) -> Result<()> {
        let tenant = fetch_tenant(cluster, &args.tenant).await?;
        let entries = self.entries(&tenant);

        let s = render_view(args.output.output, self.command, &entries, |s| self.generate_text(&args.tenant, &entries, s))?;

        emit(host, &s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tenant() -> Attr {
        Attr::from(json!({
            "spec": {
                "imageRegistries": { "allowed": ["quay.io", "docker.io", " quay.io "] },
                "serviceAccounts": { "denied": ["default"] }
            }
        }))
    }

    fn render(view: &StringListView, tenant: &Attr) -> String {
        let mut s = String::new();
        view.generate_text("acme", &view.entries(tenant), &mut s).unwrap();
        s
    }

    #[test]
    fn test_image_registries() {
        assert_eq!(
            render(&IMAGE_REGISTRIES, &tenant()),
            "Tenant: acme\n\nAllowed Image Registries:\n  - docker.io\n  - quay.io\n"
        );
    }

    #[test]
    fn test_service_accounts() {
        assert_eq!(
            render(&SERVICE_ACCOUNTS, &tenant()),
            "Tenant: acme\n\nDenied Service Accounts:\n  - default\n"
        );
    }

    #[test]
    fn test_empty_messages() {
        let bare = Attr::from(json!({ "spec": {} }));
        assert_eq!(render(&IMAGE_REGISTRIES, &bare), "Tenant: acme\n\nNo image registries configured.\n");
        assert_eq!(render(&SERVICE_ACCOUNTS, &bare), "Tenant: acme\n\nNo service accounts denied.\n");
    }
}
