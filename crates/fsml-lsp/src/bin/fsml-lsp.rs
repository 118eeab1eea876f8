//! FSML LSP Server Binary Entry Point

use fsml_lsp::create_lsp_service;
use tower_lsp::Server;

#[tokio::main]
async fn main() {
    env_logger::init();

    log::info!("FSML LSP server starting, listening on stdin/stdout");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_lsp_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
