//! CLI module for userbase
//!
//! Provides the command-line interface:
//! - start: Boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, start};
pub use errors::{CliError, CliResult};
