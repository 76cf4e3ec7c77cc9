//! CLI argument definitions using clap
//!
//! Commands:
//! - userbase start [--host <host>] [--port <port>] [--empty]

use clap::{Parser, Subcommand};

/// userbase - A validated, in-memory user CRUD service
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Start with an empty store instead of the seed records
        #[arg(long)]
        empty: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
