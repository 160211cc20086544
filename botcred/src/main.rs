//! Command-line entry point for the BotCred badge service.
//!
//! The binary reads its configuration from flags or the environment, validates
//! it before touching the network, and then serves the HTTP API until it
//! receives Ctrl+C or SIGTERM.

use std::process;

use botcred::{Error, ServiceArgs, ServiceConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "botcred=info";

/// Command line interface of the badge service.
#[derive(Debug, Parser,)]
#[command(name = "botcred", version, about = "Serve verified skill badges for Moltbook agents")]
struct Cli
{
    #[command(flatten)]
    service: ServiceArgs,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER,),);
    tracing_subscriber::fmt().with_env_filter(filter,).init();
}

/// Validates the configuration and serves the API.
///
/// # Errors
///
/// Propagates configuration, client construction, and listener errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = ServiceConfig::try_from(cli.service,)?;
    botcred::serve(config,).await
}
