use super::Host;
use super::common::{GlobalArgs, emit};
use crate::Result;
use crate::config::FlagFile;
use crate::flags::{Feature, FlagRegistry};
use clap::{Args, Subcommand};
use core::fmt::Write;
use core::str::FromStr;
use ohno::bail;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show every feature flag and where its value comes from
    List,
    /// Turn a feature on and save it to the flag file
    Enable(FeatureArg),
    /// Turn a feature off and save it to the flag file
    Disable(FeatureArg),
    /// Print the location of the flag file
    Path,
}

#[derive(Args, Debug)]
pub struct FeatureArg {
    /// Feature name, e.g. hibernation or hostValidation
    #[arg(value_name = "FEATURE")]
    pub feature: String,
}

fn parse_feature(name: &str) -> Result<Feature> {
    if let Ok(feature) = Feature::from_str(name) {
        return Ok(feature);
    }

    if let Some(suggestion) = Feature::suggest(name) {
        bail!("unknown feature \"{name}\"; did you mean \"{suggestion}\"?");
    }

    let known: Vec<_> = Feature::iter().map(|f| f.to_string()).collect();
    bail!("unknown feature \"{name}\"; known features: {}", known.join(", "))
}

fn write_flag_line<W: Write>(name: &str, enabled: bool, source: &str, use_colors: bool, writer: &mut W) -> Result<()> {
    let status = match (enabled, use_colors) {
        (true, true) => "Enabled".green().to_string(),
        (false, true) => "Disabled".red().to_string(),
        (true, false) => "Enabled".to_string(),
        (false, false) => "Disabled".to_string(),
    };

    if source.is_empty() {
        writeln!(writer, "{name:<25} {status}")?;
    } else {
        writeln!(writer, "{name:<25} {status} (source: {source})")?;
    }
    Ok(())
}

fn generate_list<W: Write>(registry: &FlagRegistry, file: &FlagFile, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "Feature Flags:")?;
    writeln!(writer, "==============")?;

    let explicit = registry.snapshot();

    for feature in Feature::iter() {
        match explicit.get(feature.as_ref()) {
            Some(flag) => write_flag_line(feature.as_ref(), flag.enabled, &flag.source, use_colors, writer)?,
            None => write_flag_line(feature.as_ref(), feature.enabled_by_default(), "default", use_colors, writer)?,
        }
    }

    // entries written by hand that do not name a known feature
    for (name, flag) in &explicit {
        if Feature::iter().all(|f| f.as_ref() != name.as_str()) {
            write_flag_line(name, flag.enabled, &flag.source, use_colors, writer)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Config file: {}", file.path())?;
    Ok(())
}

fn set_feature<H: Host>(host: &mut H, global: &GlobalArgs, name: &str, enabled: bool) -> Result<()> {
    let feature = parse_feature(name)?;
    let (file, registry) = global.load_flags(host)?;

    if enabled {
        registry.enable(feature);
    } else {
        registry.disable(feature);
    }
    file.save(&registry)?;

    let verb = if enabled { "enabled" } else { "disabled" };
    log::info!(target: super::LOG_TARGET, "feature '{feature}' {verb} in '{}'", file.path());

    let mut s = String::new();
    writeln!(s, "Feature '{feature}' has been {verb}.")?;
    writeln!(s, "Config file: {}", file.path())?;
    emit(host, &s);
    Ok(())
}

pub fn process_config<H: Host>(host: &mut H, global: &GlobalArgs, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommand::List => {
            let (file, registry) = global.load_flags(host)?;
            let mut s = String::new();
            generate_list(&registry, &file, global.use_colors(), &mut s)?;
            emit(host, &s);
            Ok(())
        }
        ConfigCommand::Enable(arg) => set_feature(host, global, &arg.feature, true),
        ConfigCommand::Disable(arg) => set_feature(host, global, &arg.feature, false),
        ConfigCommand::Path => {
            let file = global.flag_file()?;
            emit(host, &format!("{}\n", file.path()));
            Ok(())
        }
    }
}
