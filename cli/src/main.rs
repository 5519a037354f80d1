//! Terminal front-end for the postboard blog API.
//!
//! Every subcommand runs one request through the shared `contract` cycle and
//! prints its toasts: success on stdout, errors on stderr. The exit status
//! is non-zero when the call did not succeed.

mod args;
mod commands;
mod http;
mod output;
mod session;

use std::process::ExitCode;

use clap::Parser;

use args::Cli;
use http::HttpTransport;
use session::FileSession;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("session token storage failed: {0}")]
    Session(#[from] contract::SessionError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool, CliError> {
    let transport = HttpTransport::new(&cli.base_url)?;
    let session = FileSession::new(cli.token_file);
    tracing::debug!(base_url = %cli.base_url, token_file = %session.path().display(), "starting");

    let report = commands::run(cli.command, &transport, &session).await?;
    Ok(report.print())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
