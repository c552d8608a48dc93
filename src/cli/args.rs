//! CLI argument definitions using clap
//!
//! Commands:
//! - notehub serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// notehub - a small, self-hostable notes HTTP service
#[derive(Parser, Debug)]
#[command(name = "notehub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the notes API server
    Serve {
        /// Host to bind to (overrides NOTEHUB_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides NOTEHUB_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from(["notehub", "serve", "--port", "8080"]);
        let Command::Serve { host, port } = cli.command;
        assert_eq!(host, None);
        assert_eq!(port, Some(8080));
    }
}
