//! Host configuration describing where assets live and where the app is mounted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "assets.config.json";

/// Narrow view of the hosting environment the tag helpers depend on.
///
/// The helpers never see the full host application, only the asset root the
/// files are served from and the URL prefix the current deployment is
/// mounted under (empty at the root, a segment such as `/bar` for a
/// sub-application).
pub trait Host {
    /// Directory the logical asset URLs resolve against.
    fn asset_root(&self) -> &Path;

    /// Mount prefix prepended to every emitted href/src.
    fn mount_prefix(&self) -> &str;
}

/// Explicit, injectable host configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory containing the served static files.
    pub asset_root: PathBuf,
    /// URL prefix of the current deployment, without a trailing slash.
    pub mount_prefix: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            mount_prefix: String::new(),
        }
    }
}

impl AssetConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so callers can continue operating with
    /// sensible assumptions.
    pub fn discover(base_dir: &Path) -> Self {
        let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl Host for AssetConfig {
    fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }
}
