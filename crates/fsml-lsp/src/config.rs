use fsml_core::config::LoggingConfig;
use fsml_core::{ConfigError, FsmlConfig, NavConfig};
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::MessageType;

/// Settings section name in `initializationOptions` and
/// `workspace/didChangeConfiguration`
pub const SETTINGS_SECTION: &str = "fsml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LspSettings {
    /// Filenames treated as folder overviews
    pub index_filenames: Vec<String>,

    /// Root-level manifest hidden from navigation
    pub root_manifest: String,

    /// Lowest level forwarded to the client's log
    pub log_level: LogLevel,

    /// Report every applied reorder to the client
    pub log_reorder_plans: bool,

    /// Maximum number of reorders kept for undo
    pub reorder_history_limit: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn message_type(self) -> MessageType {
        match self {
            LogLevel::Trace | LogLevel::Debug => MessageType::LOG,
            LogLevel::Info => MessageType::INFO,
            LogLevel::Warning => MessageType::WARNING,
            LogLevel::Error => MessageType::ERROR,
        }
    }
}

impl Default for LspSettings {
    fn default() -> Self {
        let nav = NavConfig::default();
        Self {
            index_filenames: nav.index_filenames,
            root_manifest: nav.root_manifest,
            log_level: LogLevel::Info,
            log_reorder_plans: LoggingConfig::default().log_reorder_plans,
            reorder_history_limit: 5,
        }
    }
}

impl LspSettings {
    /// Pull the `fsml` section out of a settings object.
    ///
    /// Returns `Ok(None)` when the section is absent.
    pub fn from_section(value: &serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        match value.get(SETTINGS_SECTION) {
            Some(section) => serde_json::from_value(section.clone()).map(Some),
            None => Ok(None),
        }
    }

    /// Build the validated core configuration
    pub fn to_config(&self) -> Result<FsmlConfig, ConfigError> {
        let config = FsmlConfig {
            navigation: NavConfig {
                index_filenames: self.index_filenames.clone(),
                root_manifest: self.root_manifest.clone(),
            },
            logging: LoggingConfig {
                log_reorder_plans: self.log_reorder_plans,
            },
        };
        config.navigation.validate()?;
        Ok(config)
    }
}
