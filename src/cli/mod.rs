//! CLI module for veridoc
//!
//! Commands:
//! - serve: load config and run the HTTP server
//! - digest: one-shot digest computation over given content

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
