//! CLI argument definitions using clap
//!
//! Commands:
//! - veridoc serve [--config <path>] [--port <port>]
//! - veridoc digest <content>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// veridoc - A tamper-evident, single-document revision store
#[derive(Parser, Debug)]
#[command(name = "veridoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file (defaults apply if omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute the SHA-256 digest of the given content and exit
    Digest {
        /// Content to digest
        content: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
