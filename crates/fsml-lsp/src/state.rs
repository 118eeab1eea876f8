use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use fsml_core::{FsmlConfig, ReorderPlan};
use tokio::sync::RwLock;

use crate::config::LspSettings;

/// Global state for the LSP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// Workspace root from `initialize`; command paths are relative to it
    pub root: Arc<RwLock<Option<PathBuf>>>,

    /// Raw client settings
    pub settings: Arc<RwLock<LspSettings>>,

    /// Validated core configuration derived from `settings`
    pub config: Arc<RwLock<FsmlConfig>>,

    /// Applied reorders, newest last.
    /// Held for the whole compute, apply, record sequence so reorders never
    /// interleave.
    pub mutation_history: Arc<RwLock<VecDeque<ReorderPlan>>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            root: Arc::new(RwLock::new(None)),
            settings: Arc::new(RwLock::new(LspSettings::default())),
            config: Arc::new(RwLock::new(FsmlConfig::default())),
            mutation_history: Arc::new(RwLock::new(VecDeque::new())),
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
