//! Project configuration (bundleme.yaml)
//!
//! An optional file at the root of the bundled project that supplies
//! metadata so a run does not need to prompt:
//!
//! ```yaml
//! name: my-project
//! description: Small C utility
//! license: LICENSE
//! author: Jane Doe
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, config_parse_failed, config_read_failed};

/// Configuration file name looked up in the bundled root
pub const CONFIG_FILE: &str = "bundleme.yaml";

/// Metadata defaults read from bundleme.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Package name
    pub name: Option<String>,

    pub description: Option<String>,

    /// Reference to the license file
    pub license: Option<String>,

    pub author: Option<String>,
}

impl BundleConfig {
    /// Parse configuration from a YAML string
    ///
    /// An empty document is an empty configuration.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load `bundleme.yaml` from `root`, if there is one
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content)
            .map(Some)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }
}
