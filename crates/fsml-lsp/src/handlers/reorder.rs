use fsml_core::{compute_reorder, ReorderPlan};
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::{ExecuteCommandParams, MessageType, WorkspaceEdit};
use tower_lsp::Client;

use crate::config::LogLevel;
use crate::conversion::reorder_plan_to_workspace_edit;
use crate::handlers::{command_params, log_to_client, to_command_result};
use crate::protocol::ReorderParams;
use crate::state::GlobalState;

fn plan_for(params: &ReorderParams) -> ReorderPlan {
    compute_reorder(
        &params.source_path,
        &params.target_path,
        params.position,
        &params.siblings,
    )
}

/// Every path the plan may touch: the sibling snapshot plus the source
fn snapshot(params: &ReorderParams) -> Vec<&str> {
    params
        .siblings
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(params.source_path.as_str()))
        .collect()
}

async fn workspace_edit(state: &GlobalState, plan: &ReorderPlan) -> Result<WorkspaceEdit> {
    let root = state.root.read().await;
    let Some(root) = root.as_deref() else {
        return Err(Error {
            code: ErrorCode::InternalError,
            message: "Workspace root not initialized".into(),
            data: None,
        });
    };

    reorder_plan_to_workspace_edit(plan, root)
        .ok_or_else(|| Error::invalid_params("Reorder paths cannot be converted to URIs"))
}

/// Send the edit and require the client to report it applied
async fn apply_workspace_edit(client: &Client, edit: WorkspaceEdit) -> Result<()> {
    client
        .apply_edit(edit)
        .await?
        .applied
        .then_some(())
        .ok_or_else(|| Error {
            code: ErrorCode::InternalError,
            message: "Client failed to apply workspace edit".into(),
            data: None,
        })
}

/// Handle "fsml/planReorder" command (dry run)
pub async fn handle_plan_reorder(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: ReorderParams = command_params(&params)?;
    let plan = plan_for(&params);

    log_to_client(
        client,
        state,
        LogLevel::Debug,
        format!(
            "planReorder {} {} {}: {} renames",
            params.source_path,
            params.position,
            params.target_path,
            plan.renames.len()
        ),
    )
    .await;

    to_command_result(plan)
}

/// Handle "fsml/applyReorder" command
///
/// The plan is checked against the sibling snapshot, sent to the client as a
/// single ordered `WorkspaceEdit`, and recorded for undo once applied.
pub async fn handle_apply_reorder(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: ReorderParams = command_params(&params)?;
    let (limit, report) = {
        let settings = state.settings.read().await;
        let config = state.config.read().await;
        (
            settings.reorder_history_limit,
            config.logging.log_reorder_plans,
        )
    };

    let mut history = state.mutation_history.write().await;

    let plan = plan_for(&params);
    if plan.is_noop() {
        return to_command_result(plan);
    }

    if let Err(e) = plan.simulate(&snapshot(&params)) {
        log_to_client(
            client,
            state,
            LogLevel::Warning,
            format!("Refusing reorder of {}: {}", params.source_path, e),
        )
        .await;
        return Err(Error::invalid_params(format!("Reorder is not applicable: {}", e)));
    }

    let edit = workspace_edit(state, &plan).await?;
    apply_workspace_edit(client, edit).await?;

    if report {
        log_to_client(
            client,
            state,
            LogLevel::Info,
            format!(
                "Reordered {} -> {} ({} renames)",
                params.source_path,
                plan.new_path,
                plan.renames.len()
            ),
        )
        .await;
    }

    if limit > 0 {
        history.push_back(plan.clone());
        while history.len() > limit {
            history.pop_front();
        }
    }

    to_command_result(plan)
}

/// Handle "fsml/undoReorder" command
///
/// Returns whether a reorder was undone. A failed undo stays in the history.
pub async fn handle_undo_reorder(
    client: &Client,
    state: &GlobalState,
) -> Result<Option<serde_json::Value>> {
    let mut history = state.mutation_history.write().await;

    let Some(plan) = history.pop_back() else {
        client
            .show_message(MessageType::INFO, "No reorder history to undo.")
            .await;
        return Ok(Some(serde_json::Value::Bool(false)));
    };

    let inverted = plan.clone().invert();
    let result = match workspace_edit(state, &inverted).await {
        Ok(edit) => client.apply_edit(edit).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) if response.applied => {
            client
                .show_message(MessageType::INFO, "Reorder undone successfully.")
                .await;
            Ok(Some(serde_json::Value::Bool(true)))
        }
        Ok(_) => {
            history.push_back(plan);
            Err(Error {
                code: ErrorCode::InternalError,
                message: "Undo edit was rejected by client or failed to apply.".into(),
                data: None,
            })
        }
        Err(e) => {
            history.push_back(plan);
            Err(Error {
                code: ErrorCode::InternalError,
                message: format!("Failed to apply undo edit: {}", e).into(),
                data: None,
            })
        }
    }
}
