use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::config::{LogLevel, LspSettings};
use crate::handlers::log_to_client;
use crate::state::GlobalState;

/// Handle "workspace/didChangeConfiguration" notification
pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    match LspSettings::from_section(&params.settings) {
        Ok(Some(settings)) => {
            if let Err(message) = apply_settings(state, settings).await {
                log_to_client(client, state, LogLevel::Error, message).await;
            } else {
                log_to_client(client, state, LogLevel::Info, "FSML settings updated").await;
            }
        }
        Ok(None) => {}
        Err(e) => {
            log_to_client(
                client,
                state,
                LogLevel::Error,
                format!("Failed to parse updated settings: {}", e),
            )
            .await;
        }
    }
}

/// Validate and install new settings, shrinking the undo history to the new
/// limit. Invalid settings leave the current ones in place.
pub(crate) async fn apply_settings(
    state: &GlobalState,
    settings: LspSettings,
) -> Result<(), String> {
    let config = settings
        .to_config()
        .map_err(|e| format!("Rejected FSML settings: {}", e))?;
    let limit = settings.reorder_history_limit;

    *state.config.write().await = config;
    *state.settings.write().await = settings;

    let mut history = state.mutation_history.write().await;
    while history.len() > limit {
        history.pop_front();
    }
    Ok(())
}
