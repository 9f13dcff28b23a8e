use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use ynab_backup::args::Args;
use ynab_backup::{commands, Config, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose());

    // Resolve the token before touching the network. clap has already consulted the
    // YNAB_BEARER_TOKEN environment variable.
    let Some(token) = args.token() else {
        eprintln!(
            "Error: bearer token must be provided via --token or the YNAB_BEARER_TOKEN \
             environment variable"
        );
        return ExitCode::FAILURE;
    };

    match main_inner(token, &args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn main_inner(token: &str, args: &Args) -> Result<()> {
    let config = Config::new(token, args.url(), args.output())?;
    commands::backup(config).await?.print();
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Without --verbose the subscriber is off entirely; fatal errors still reach stderr through
/// `main` directly.
fn init_logger(verbose: bool) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None if verbose => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            LevelFilter::DEBUG,
            env!("CARGO_BIN_NAME"),
            LevelFilter::DEBUG
        )),
        None => EnvFilter::new(LevelFilter::OFF.to_string()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
