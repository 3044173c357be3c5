use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Names the config file to read instead of the default locations.
pub const CONFIG_ENV: &str = "CUDNN_DYNLOAD_CONFIG";
/// Overrides `cudnn.dir`.
pub const DIR_ENV: &str = "CUDNN_DIR";
/// Overrides `cudnn.library`.
pub const LIBRARY_ENV: &str = "CUDNN_LIBRARY";

pub const CONFIG_FILE_NAME: &str = "cudnn-dynload.toml";

/// Top-level configuration, loaded from cudnn-dynload.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynloadConfig {
    #[serde(default)]
    pub cudnn: CudnnConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CudnnConfig {
    /// Directory searched before the system loader paths
    pub dir: Option<PathBuf>,
    /// Exact library path or file name; when set nothing else is tried
    pub library: Option<String>,
}

impl DynloadConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Configuration in effect for this process: the config file (if any)
    /// with environment overrides applied on top.
    pub fn resolve() -> Self {
        let from_file = match default_config_path() {
            Some(path) => match Self::load(&path) {
                Ok(config) => {
                    debug!("loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("ignoring configuration {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        from_file.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `CUDNN_DIR` / `CUDNN_LIBRARY` style overrides from `lookup`.
    /// Empty values count as unset.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(dir) = lookup(DIR_ENV) {
            self.cudnn.dir = Some(PathBuf::from(dir));
        }
        if let Some(library) = lookup(LIBRARY_ENV) {
            self.cudnn.library = Some(library);
        }
        self
    }
}

/// Returns the config file to read, if any.
/// Search order:
/// 1. `$CUDNN_DYNLOAD_CONFIG`
/// 2. System-wide config: `%PROGRAMDATA%\cudnn-dynload\cudnn-dynload.toml` (Windows) or `/etc/cudnn-dynload/cudnn-dynload.toml`
/// 3. Local fallback: `./cudnn-dynload.toml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let system_path =
        PathBuf::from(cudnn_dynload_common::platform::system_config_dir()).join(CONFIG_FILE_NAME);
    if system_path.exists() {
        return Some(system_path);
    }

    let local_path = PathBuf::from(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Some(local_path);
    }

    None
}
