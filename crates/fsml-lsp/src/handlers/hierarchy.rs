use fsml_core::{build_nav_tree, parse_path, sort_paths};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::ExecuteCommandParams;
use tower_lsp::Client;

use crate::config::LogLevel;
use crate::handlers::{command_params, log_to_client, to_command_result};
use crate::protocol::{NavTreeResult, ParsePathParams, PathListParams, SortPathsResult};
use crate::state::GlobalState;

/// Handle "fsml/parsePath" command
pub async fn handle_parse_path(
    _state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: ParsePathParams = command_params(&params)?;
    to_command_result(parse_path(&params.path))
}

/// Handle "fsml/sortPaths" command
pub async fn handle_sort_paths(
    _state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: PathListParams = command_params(&params)?;
    to_command_result(SortPathsResult {
        paths: sort_paths(&params.paths),
    })
}

/// Handle "fsml/navTree" command, using the session's navigation settings
pub async fn handle_nav_tree(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: PathListParams = command_params(&params)?;

    let roots = {
        let config = state.config.read().await;
        build_nav_tree(&params.paths, &config.navigation)
    };

    log_to_client(
        client,
        state,
        LogLevel::Debug,
        format!(
            "navTree: {} paths, returning {} root nodes",
            params.paths.len(),
            roots.len()
        ),
    )
    .await;

    to_command_result(NavTreeResult { roots })
}
