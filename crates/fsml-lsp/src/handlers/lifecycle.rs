use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::config::{LogLevel, LspSettings};
use crate::handlers::configuration::apply_settings;
use crate::handlers::log_to_client;
use crate::protocol::COMMANDS;
use crate::state::GlobalState;

/// Handle "initialize" request
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    if let Some(options) = &params.initialization_options {
        match LspSettings::from_section(options) {
            Ok(Some(settings)) => {
                if let Err(message) = apply_settings(state, settings).await {
                    log_to_client(client, state, LogLevel::Error, message).await;
                }
            }
            Ok(None) => {}
            Err(e) => {
                log_to_client(
                    client,
                    state,
                    LogLevel::Error,
                    format!("Invalid initializationOptions, using defaults: {}", e),
                )
                .await;
            }
        }
    }

    match params.root_uri.as_ref().map(|uri| uri.to_file_path()) {
        Some(Ok(root_path)) => {
            log_to_client(
                client,
                state,
                LogLevel::Info,
                format!("Initializing workspace at: {:?}", root_path),
            )
            .await;
            *state.root.write().await = Some(root_path);
        }
        Some(Err(())) => {
            log_to_client(
                client,
                state,
                LogLevel::Warning,
                "rootUri is not a file path, reorders cannot be applied",
            )
            .await;
        }
        None => {
            log_to_client(client, state, LogLevel::Warning, "No rootUri provided!").await;
        }
    }

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
        ..Default::default()
    })
}
