mod configuration;
mod hierarchy;
mod lifecycle;
mod reorder;

pub use configuration::*;
pub use hierarchy::*;
pub use lifecycle::*;
pub use reorder::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::ExecuteCommandParams;
use tower_lsp::Client;

use crate::config::LogLevel;
use crate::protocol;
use crate::state::GlobalState;

/// Handle "workspace/executeCommand"
pub async fn handle_execute_command(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    log::debug!("executeCommand {}", params.command);

    match params.command.as_str() {
        protocol::PARSE_PATH => handle_parse_path(state, params).await,
        protocol::SORT_PATHS => handle_sort_paths(state, params).await,
        protocol::NAV_TREE => handle_nav_tree(client, state, params).await,
        protocol::PLAN_REORDER => handle_plan_reorder(client, state, params).await,
        protocol::APPLY_REORDER => handle_apply_reorder(client, state, params).await,
        protocol::UNDO_REORDER => handle_undo_reorder(client, state).await,
        other => Err(Error {
            code: ErrorCode::MethodNotFound,
            message: format!("Unknown command: {}", other).into(),
            data: None,
        }),
    }
}

/// Deserialize the single object argument of a command
pub(crate) fn command_params<T: DeserializeOwned>(params: &ExecuteCommandParams) -> Result<T> {
    let Some(first_arg) = params.arguments.first() else {
        return Err(Error::invalid_params(format!(
            "Missing params for {}",
            params.command
        )));
    };

    serde_json::from_value(first_arg.clone())
        .map_err(|e| Error::invalid_params(format!("Invalid params for {}: {}", params.command, e)))
}

pub(crate) fn to_command_result<T: Serialize>(value: T) -> Result<Option<serde_json::Value>> {
    serde_json::to_value(value).map(Some).map_err(|e| Error {
        code: ErrorCode::InternalError,
        message: format!("Failed to serialize results: {}", e).into(),
        data: None,
    })
}

/// Log locally and forward to the client when `level` passes the
/// configured `logLevel`
pub(crate) async fn log_to_client(
    client: &Client,
    state: &GlobalState,
    level: LogLevel,
    message: impl Into<String>,
) {
    let message = message.into();
    match level {
        LogLevel::Trace => log::trace!("{}", message),
        LogLevel::Debug => log::debug!("{}", message),
        LogLevel::Info => log::info!("{}", message),
        LogLevel::Warning => log::warn!("{}", message),
        LogLevel::Error => log::error!("{}", message),
    }

    let threshold = state.settings.read().await.log_level;
    if level >= threshold {
        client.log_message(level.message_type(), message).await;
    }
}
