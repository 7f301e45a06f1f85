//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::library::Library;
use crate::observability::init_logging;

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

/// Start the HTTP server with an empty library.
///
/// State lives for the life of the process and is discarded on shutdown.
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(host, port)?;
    init_logging(&config.logging)?;

    let library = Arc::new(Library::new());
    let server = HttpServer::with_library(config.server.clone(), library);
    info!(addr = %server.listen_addr(), "starting bookshelf");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
