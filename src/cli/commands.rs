//! CLI command implementations
//!
//! Thin dispatch: parse args, load configuration, hand off to the HTTP
//! server. No subsystem logic lives here.

use std::path::PathBuf;

use crate::digest::Digest;
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(config, port),
        Command::Digest { content } => {
            println!("{}", Digest::compute(content.as_bytes()));
            Ok(())
        }
    }
}

/// Load configuration and run the server until shutdown
fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(&path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_command_runs() {
        let result = run_command(Command::Digest {
            content: "Hello World".to_string(),
        });
        assert!(result.is_ok());
    }
}
