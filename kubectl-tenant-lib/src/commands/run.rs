//! Command dispatch logic for kubectl-tenant

use super::common::{GlobalArgs, TenantViewArgs};
use super::config::{ConfigArgs, process_config};
use super::get::{GetArgs, process_get};
use super::list::{ListArgs, process_list};
use super::string_list_view::{IMAGE_REGISTRIES, SERVICE_ACCOUNTS};
use super::{
    LOG_TARGET, process_access_control, process_hibernation, process_host_validation, process_namespaces, process_quota,
    process_version,
};
use crate::cluster::{Cluster, KubeCluster};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "kubectl-tenant", bin_name = "kubectl tenant", version, author)]
#[command(about = "Inspect Multi Tenant Operator tenants and the resources they are allowed to use")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: TenantSubcommand,
}

#[derive(Subcommand, Debug)]
enum TenantSubcommand {
    /// Show cluster resources a tenant is allowed to use
    Get(GetArgs),
    /// List every tenant with its spec
    List(ListArgs),
    /// Show the Quota referenced by a tenant
    Quota(TenantViewArgs),
    /// Show a tenant's namespace configuration and resolved namespaces
    Namespaces(TenantViewArgs),
    /// Show a tenant's hibernation schedule
    Hibernation(TenantViewArgs),
    /// Show a tenant's ingress host validation rules
    HostValidation(TenantViewArgs),
    /// Show a tenant's owners, editors and viewers
    AccessControl(TenantViewArgs),
    /// Show the image registries a tenant may pull from
    ImageRegistries(TenantViewArgs),
    /// Show the service accounts a tenant may not use
    ServiceAccounts(TenantViewArgs),
    /// Manage feature flags
    Config(ConfigArgs),
    /// Show version information for the plugin and the operator
    Version,
}

/// Parse the command line, accepting both `kubectl-tenant <cmd>` and `kubectl tenant <cmd>`.
fn parse_cli<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(|arg| arg == "tenant") {
        let _ = args.remove(1);
    }

    let cli = Cli::parse_from(args);
    cli.global.init_logging();
    cli
}

async fn dispatch<H: Host, C: Cluster>(host: &mut H, cli: &Cli, cluster: &C) -> Result<()> {
    let global = &cli.global;

    match &cli.command {
        TenantSubcommand::Get(args) => process_get(host, global, args, cluster).await,
        TenantSubcommand::List(args) => process_list(host, global, args, cluster).await,
        TenantSubcommand::Quota(args) => process_quota(host, args, cluster).await,
        TenantSubcommand::Namespaces(args) => process_namespaces(host, args, cluster).await,
        TenantSubcommand::Hibernation(args) => process_hibernation(host, args, cluster).await,
        TenantSubcommand::HostValidation(args) => process_host_validation(host, args, cluster).await,
        TenantSubcommand::AccessControl(args) => process_access_control(host, args, cluster).await,
        TenantSubcommand::ImageRegistries(args) => IMAGE_REGISTRIES.process(host, args, cluster).await,
        TenantSubcommand::ServiceAccounts(args) => SERVICE_ACCOUNTS.process(host, args, cluster).await,
        TenantSubcommand::Config(args) => process_config(host, global, args),
        TenantSubcommand::Version => process_version(host, Some(cluster)).await,
    }
}

/// Print a failed command's error and exit with a non-zero status.
fn finish<H: Host>(host: &mut H, result: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        let _ = writeln!(host.error(), "error: {e}");
        host.exit(1);
    }
    result
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Connects to the cluster selected by `--kubeconfig` and `--context` (or the
/// inferred configuration) for every command that needs it. It's designed to be
/// called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if connecting to the cluster fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    H: Host,
{
    let cli = parse_cli(args);

    let result = match &cli.command {
        TenantSubcommand::Config(args) => process_config(host, &cli.global, args),
        command => match KubeCluster::connect(&cli.global.connect_options()).await {
            Ok(cluster) => dispatch(host, &cli, &cluster).await,
            Err(e) if matches!(command, TenantSubcommand::Version) => {
                log::warn!(target: LOG_TARGET, "unable to connect to the cluster: {e}");
                process_version::<H, KubeCluster>(host, None).await
            }
            Err(e) => Err(e),
        },
    };

    finish(host, result)
}

/// Like [`run`], but against an already established [`Cluster`].
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run_with_cluster<I, T, H, C>(host: &mut H, cluster: &C, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    H: Host,
    C: Cluster,
{
    let cli = parse_cli(args);
    let result = dispatch(host, &cli, cluster).await;
    finish(host, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_kubectl_plugin_invocation() {
        let cli = parse_cli(["kubectl-tenant", "tenant", "hibernation", "acme"]);
        assert!(matches!(&cli.command, TenantSubcommand::Hibernation(args) if args.tenant == "acme"));
    }

    #[test]
    fn test_direct_invocation() {
        let cli = parse_cli(["kubectl-tenant", "get", "storageclasses", "acme", "-o", "json"]);
        assert!(matches!(&cli.command, TenantSubcommand::Get(args) if args.resource == "storageclasses"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse_cli(["kubectl-tenant", "list", "--request-timeout", "5", "--color", "never"]);
        assert_eq!(cli.global.request_timeout, 5);
        assert!(!cli.global.use_colors());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = parse_cli(["kubectl-tenant", "config", "enable", "hibernation"]);
        assert!(matches!(&cli.command, TenantSubcommand::Config(_)));

        let cli = parse_cli(["kubectl-tenant", "version"]);
        assert!(matches!(&cli.command, TenantSubcommand::Version));
    }
}
