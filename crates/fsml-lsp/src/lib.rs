//! FSML LSP Library
//!
//! LSP protocol layer, exposes the core path operations as
//! `workspace/executeCommand` commands and applies reorders through
//! `workspace/applyEdit`.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LspService};

use crate::state::GlobalState;

pub mod config;
mod conversion;
mod handlers;
pub mod protocol;
mod state;


/// LSP backend implementation
pub struct Backend {
    client: Client,
    state: GlobalState,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: GlobalState::new(),
        }
    }
}

#[tower_lsp::async_trait]
impl tower_lsp::LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handlers::handle_initialize(&self.client, &self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("Client initialized, ready to accept requests");
    }

    async fn shutdown(&self) -> Result<()> {
        log::info!("Shutdown requested");
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handlers::handle_did_change_configuration(&self.client, &self.state, params).await
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        handlers::handle_execute_command(&self.client, &self.state, params).await
    }
}

/// Create and return LSP service and client socket
pub fn create_lsp_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
