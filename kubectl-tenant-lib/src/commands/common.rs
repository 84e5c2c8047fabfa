//! Options and plumbing shared by every command.

use super::{Host, LOG_TARGET};
use crate::Result;
use crate::cluster::{Cluster, ConnectOptions, ResourceKind};
use crate::config::FlagFile;
use crate::extract::extract_map;
use crate::flags::{Feature, FlagRegistry};
use crate::render::{OutputFormat, generate_json, generate_yaml};
use crate::tree::{Attr, AttrMap};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use core::time::Duration;
use ohno::bail;
use serde::Serialize;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every command
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Feature flag file (default is `$XDG_CONFIG_HOME/kubectl-tenant/tenant-config.yaml` or `~/.kube/tenant-config.yaml`)
    #[arg(long, global = true, env = "KUBECTL_TENANT_CONFIG", value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Path to the kubeconfig file to use
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<Utf8PathBuf>,

    /// Name of the kubeconfig context to use
    #[arg(long, global = true, value_name = "NAME")]
    pub context: Option<String>,

    /// Seconds to wait for each API request before giving up
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = 30)]
    pub request_timeout: u64,

    /// Log level for diagnostic output
    #[arg(long, global = true, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Whether to use colors in output
    #[arg(long, global = true, value_name = "MODE", default_value = "auto")]
    pub color: ColorMode,
}

impl GlobalArgs {
    /// Initialize logger based on log level
    pub fn init_logging(&self) {
        let level = match self.log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // A logger may already be installed when commands run more than once in a process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(self.log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }

    #[must_use]
    pub fn connect_options(&self) -> ConnectOptions<'_> {
        ConnectOptions {
            kubeconfig: self.kubeconfig.as_deref(),
            context: self.context.as_deref(),
            timeout: Duration::from_secs(self.request_timeout),
        }
    }

    pub fn flag_file(&self) -> Result<FlagFile> {
        match &self.config {
            Some(path) => Ok(FlagFile::new(path.clone())),
            None => FlagFile::at_default_location(),
        }
    }

    /// Load the persisted flags, creating the flag file on first use.
    pub fn load_flags<H: Host>(&self, host: &mut H) -> Result<(FlagFile, FlagRegistry)> {
        let file = self.flag_file()?;
        let (registry, created) = file.load_or_create()?;
        if created {
            let _ = writeln!(host.error(), "Created default config at {}", file.path());
        }
        Ok((file, registry))
    }
}

/// Output format option for commands that render cluster objects or tenant views
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the commands that show one part of a tenant
#[derive(Args, Debug)]
pub struct TenantViewArgs {
    /// Name of the Tenant
    #[arg(value_name = "TENANT")]
    pub tenant: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn ensure_enabled(registry: &FlagRegistry, feature: Feature) -> Result<()> {
    if !registry.is_enabled(feature) {
        bail!("feature \"{feature}\" is disabled");
    }
    Ok(())
}

pub async fn fetch_tenant<C: Cluster>(cluster: &C, tenant: &str) -> Result<Attr> {
    cluster
        .fetch(&ResourceKind::TENANT, tenant, None)
        .await
        .map_err(|e| e.into_app_err_for(&ResourceKind::TENANT, tenant))
}

/// The object at `spec.<field>` of a Tenant, or `None` when it is unset, empty, or malformed.
#[must_use]
pub fn tenant_section<'a>(tenant: &'a Attr, field: &str) -> Option<&'a AttrMap> {
    match extract_map(tenant, &["spec", field]) {
        Ok(section) => section.filter(|map| !map.is_empty()),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "{e}, ignoring it");
            None
        }
    }
}

/// Render a tenant view: the human-readable summary for text output, the raw data otherwise.
///
/// Views never print object names, so `-o name` is rejected.
pub fn render_view<T, F>(format: OutputFormat, command: &str, raw: &T, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut String) -> Result<()>,
{
    let mut s = String::new();
    match format {
        OutputFormat::Text => text(&mut s)?,
        OutputFormat::Json => generate_json(raw, &mut s)?,
        OutputFormat::Yaml => generate_yaml(raw, &mut s)?,
        OutputFormat::Name => bail!("output format \"name\" is not supported by the {command} command"),
    }
    Ok(s)
}

/// First lines of every text view.
pub fn write_tenant_header<W: core::fmt::Write>(tenant_name: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "Tenant: {tenant_name}")?;
    writeln!(writer)?;
    Ok(())
}

/// `- item` lines under a heading, or nothing when the list is empty.
pub fn write_bullets<W, I, S>(heading: &str, indent: usize, items: I, writer: &mut W) -> Result<()>
where
    W: core::fmt::Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pad = " ".repeat(indent);
    let mut items = items.into_iter().peekable();
    if items.peek().is_some() {
        writeln!(writer, "{pad}{heading}")?;
        for item in items {
            writeln!(writer, "{pad}  - {}", item.as_ref())?;
        }
    }
    Ok(())
}

/// The string entries of the list under `key`, skipping anything that is not a string.
pub fn strings_at<'a>(section: &'a AttrMap, key: &str) -> impl Iterator<Item = &'a str> + use<'a> {
    section.get(key).and_then(Attr::as_array).unwrap_or_default().iter().filter_map(Attr::as_str)
}

/// Send rendered text to the host's output.
pub fn emit<H: Host>(host: &mut H, text: &str) {
    let _ = write!(host.output(), "{text}");
}
