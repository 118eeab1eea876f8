use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for FSML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmlConfig {
    pub navigation: NavConfig,
    pub logging: LoggingConfig,
}

/// Settings consumed by [`crate::build_nav_tree`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Filenames that mark their folder as having overview content.
    /// Matched case-insensitively.
    pub index_filenames: Vec<String>,
    /// Project manifest at the root, never shown in navigation
    pub root_manifest: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log the selected case and rename count for every reorder plan
    pub log_reorder_plans: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            index_filenames: vec!["index.md".to_string(), "index.qmd".to_string()],
            root_manifest: "mrmd.md".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_reorder_plans: true,
        }
    }
}

impl NavConfig {
    pub fn is_index_file(&self, filename: &str) -> bool {
        if filename.is_empty() {
            return false;
        }
        let filename = filename.to_lowercase();
        self.index_filenames
            .iter()
            .any(|index| index.to_lowercase() == filename)
    }

    pub fn is_root_manifest(&self, path: &str) -> bool {
        path == self.root_manifest
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_manifest.is_empty() {
            return Err(ConfigError::EmptyRootManifest);
        }
        for name in self.index_filenames.iter().chain(Some(&self.root_manifest)) {
            if name.contains('/') {
                return Err(ConfigError::NotAFilename(name.clone()));
            }
        }
        Ok(())
    }
}

impl FsmlConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.navigation.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse and validate a JSON value, e.g. editor settings
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.navigation.validate()?;
        Ok(config)
    }
}
