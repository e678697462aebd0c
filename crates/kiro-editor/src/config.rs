//! Discovery configuration.
//!
//! Configuration comes from three places, consulted in this order when
//! searching:
//!
//! 1. the `KIRO_INSTALL_PATH` environment variable,
//! 2. `search_roots` from `<config dir>/kiro-bridge/config.toml`,
//! 3. the platform's conventional install locations (unless disabled).
//!
//! ```toml
//! [discovery]
//! search_roots = ["/opt/custom/kiro"]
//! include_default_locations = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::INSTALL_PATH_ENV;

/// Application directory name under the user's config directory.
const APP_DIR: &str = "kiro-bridge";
/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    discovery: DiscoveryConfig,
}

/// Where to look for installations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Extra installation roots, searched before the defaults.
    pub search_roots: Vec<PathBuf>,
    /// Whether to probe the platform's conventional install locations.
    pub include_default_locations: bool,
    /// Root taken from `KIRO_INSTALL_PATH`; never read from the file.
    #[serde(skip)]
    pub env_override: Option<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_roots: Vec::new(),
            include_default_locations: true,
            env_override: None,
        }
    }
}

impl DiscoveryConfig {
    /// Defaults plus the environment override, if set.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Read `KIRO_INSTALL_PATH` into `env_override`. Empty values are ignored.
    pub fn with_env(mut self) -> Self {
        self.env_override = std::env::var_os(INSTALL_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        self
    }

    /// Only search the given roots.
    pub fn with_roots_only(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_roots: roots.into_iter().collect(),
            include_default_locations: false,
            env_override: None,
        }
    }

    /// Parse a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = kiro_fs::io::read_text(path)?;
        Self::parse(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse TOML config content.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        Ok(file.discovery)
    }

    /// Load the user's config file merged with the environment.
    ///
    /// An unreadable or invalid file is logged and replaced by the defaults.
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::from_env();
        };
        match Self::load(&path) {
            Ok(loaded) => loaded.with_env(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring config file");
                Self::from_env()
            }
        }
    }
}

/// `<config dir>/kiro-bridge/config.toml`, when a config dir is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
