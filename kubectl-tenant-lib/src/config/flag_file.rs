use super::LOG_TARGET;
use crate::Result;
use crate::flags::{FeatureFlag, FlagRegistry, SOURCE_CONFIG_FILE};
use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;

const APP_DIR: &str = "kubectl-tenant";
const FILE_NAME: &str = "tenant-config.yaml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(rename = "featureFlags", default)]
    feature_flags: BTreeMap<String, FeatureFlag>,
}

/// Where the flag file lives for the given environment.
///
/// `$XDG_CONFIG_HOME/kubectl-tenant/tenant-config.yaml` when `xdg_config_home`
/// is set and non-empty, `<home>/.kube/tenant-config.yaml` otherwise.
#[must_use]
pub fn resolve_config_path(xdg_config_home: Option<&str>, home: &Utf8Path) -> Utf8PathBuf {
    match xdg_config_home {
        Some(xdg) if !xdg.is_empty() => Utf8Path::new(xdg).join(APP_DIR).join(FILE_NAME),
        _ => home.join(".kube").join(FILE_NAME),
    }
}

/// The flag file at a fixed path.
#[derive(Debug, Clone)]
pub struct FlagFile {
    path: Utf8PathBuf,
}

impl FlagFile {
    #[must_use]
    pub const fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    /// The flag file at the per-user default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or is not valid UTF-8
    pub fn at_default_location() -> Result<Self> {
        let base_dirs = BaseDirs::new().into_app_err("could not determine home directory")?;
        let home = Utf8Path::from_path(base_dirs.home_dir()).into_app_err("home directory path is not valid UTF-8")?;
        let xdg = std::env::var("XDG_CONFIG_HOME").ok();

        Ok(Self::new(resolve_config_path(xdg.as_deref(), home)))
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load the flags, writing an empty flag file first if none exists.
    ///
    /// Returns the registry and whether the file had to be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or created
    pub fn load_or_create(&self) -> Result<(FlagRegistry, bool)> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(target: LOG_TARGET, "No flag file at '{}', creating one", self.path);
                let registry = FlagRegistry::new();
                self.save(&registry)?;
                return Ok((registry, true));
            }
            Err(e) => return Err(e).into_app_err_with(|| format!("reading flag file '{}'", self.path)),
        };

        let document: Document = if text.trim().is_empty() {
            Document::default()
        } else {
            serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing flag file '{}'", self.path))?
        };

        let flags = document
            .feature_flags
            .into_iter()
            .map(|(name, mut flag)| {
                if flag.source.is_empty() {
                    flag.source = SOURCE_CONFIG_FILE.to_string();
                }
                (name, flag)
            })
            .collect::<BTreeMap<_, _>>();

        log::debug!(target: LOG_TARGET, "Loaded {} flag(s) from '{}'", flags.len(), self.path);
        Ok((FlagRegistry::from_flags(flags), false))
    }

    /// Write every explicit entry of `registry` to the file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self, registry: &FlagRegistry) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent).into_app_err_with(|| format!("creating directory '{parent}'"))?;
        }

        let document = Document {
            feature_flags: registry.snapshot(),
        };

        let text = serde_yaml::to_string(&document).into_app_err("serializing feature flags")?;
        fs::write(&self.path, text).into_app_err_with(|| format!("writing flag file '{}'", self.path))?;

        log::debug!(target: LOG_TARGET, "Saved {} flag(s) to '{}'", document.feature_flags.len(), self.path);
        Ok(())
    }
}
