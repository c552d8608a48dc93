//! CLI module
//!
//! Owns process bootstrap: argument parsing, logging initialization,
//! runtime construction, and dispatch to the server.

mod args;

pub use args::{Cli, Command};

use crate::api::{ApiConfig, ApiServer};

/// Parse arguments and run the selected command to completion.
pub fn run() -> std::io::Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

fn serve(host: Option<String>, port: Option<u16>) -> std::io::Result<()> {
    init_tracing();

    let mut config = ApiConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ApiServer::with_config(config).start())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notehub=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
