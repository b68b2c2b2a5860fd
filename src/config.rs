//! Default-distribution persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk configuration — a single JSON object.
///
/// Unknown keys are ignored on read, keeping the format forward compatible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WwsetConfig {
    /// Canonical name of the distribution used when no explicit name is
    /// given. Set only through `wwset set`; may go stale if the
    /// distribution is later removed (not re-validated on read).
    #[serde(default)]
    pub default_distro: Option<String>,
}

/// Config file manager for the stored default (`~/.wwset/config.json`).
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a config store using the default path, honoring the
    /// `WWSET_CONFIG` environment variable override.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Ok(val) = std::env::var("WWSET_CONFIG") {
            return Ok(Self::with_path(PathBuf::from(val)));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".wwset").join("config.json")))
    }

    /// Create a config store with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the configuration.
    ///
    /// A missing, unreadable, or corrupt file yields the default config —
    /// a read or parse failure never escapes this boundary.
    #[must_use]
    pub fn load(&self) -> WwsetConfig {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return WwsetConfig::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the configuration, creating missing parent directories.
    ///
    /// Whole-file overwrite, no lock: two racing invocations interleave
    /// arbitrarily and the last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, config: &WwsetConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config).context("serializing config")?;
        std::fs::write(&self.path, &content)
            .with_context(|| format!("writing config file {}", self.path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", self.path.display()))?;
        }
        Ok(())
    }

    /// The path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
