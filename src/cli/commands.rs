//! CLI command implementations
//!
//! The start command builds the store and server, brings up a tokio
//! runtime and blocks on the serving loop.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::UserStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once, filtered from RUST_LOG (default "info").
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap_or_default();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    });
}

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Start { host, port, empty } => start(host, port, empty),
    }
}

/// Start the HTTP server and serve until the process is terminated
pub fn start(host: String, port: u16, empty: bool) -> CliResult<()> {
    init_tracing();

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let store = if empty {
        UserStore::new()
    } else {
        UserStore::seeded()
    };
    let server = HttpServer::with_config(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to build runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
