use fsml_core::{NavNode, Position};
use serde::{Deserialize, Serialize};

pub const PARSE_PATH: &str = "fsml/parsePath";
pub const SORT_PATHS: &str = "fsml/sortPaths";
pub const NAV_TREE: &str = "fsml/navTree";
pub const PLAN_REORDER: &str = "fsml/planReorder";
pub const APPLY_REORDER: &str = "fsml/applyReorder";
pub const UNDO_REORDER: &str = "fsml/undoReorder";

/// Commands advertised in `executeCommandProvider`
pub const COMMANDS: [&str; 6] = [
    PARSE_PATH,
    SORT_PATHS,
    NAV_TREE,
    PLAN_REORDER,
    APPLY_REORDER,
    UNDO_REORDER,
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ParsePathParams {
    pub path: String,
}

/// Shared by `fsml/sortPaths` and `fsml/navTree`
#[derive(Debug, Serialize, Deserialize)]
pub struct PathListParams {
    pub paths: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SortPathsResult {
    pub paths: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavTreeResult {
    pub roots: Vec<NavNode>,
}

/// Arguments of `fsml/planReorder` and `fsml/applyReorder`.
/// All paths are relative to the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderParams {
    pub source_path: String,
    pub target_path: String,
    pub position: Position,
    /// Snapshot of the paths around the target
    #[serde(default)]
    pub siblings: Vec<String>,
}
