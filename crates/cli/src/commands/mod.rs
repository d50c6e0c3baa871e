//! CLI commands module.

use anyhow::Result;
use blockwave_client::{ApiClient, ClientConfig, Notifier, TerminalNotifier};
use blockwave_explorer::Explorer;
use clap::Subcommand;
use std::sync::Arc;

mod chain;
mod mine;
mod tx;
mod watch;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the chain, newest block first
    Chain(chain::ChainArgs),
    /// Ask the backend to mine a new block
    Mine,
    /// Create a new transaction
    Tx(tx::TxArgs),
    /// Interactive explorer that refreshes periodically
    Watch(watch::WatchArgs),
}

pub async fn run(cmd: Commands, api_url: &str) -> Result<()> {
    let config = client_config(api_url, &cmd);
    let explorer = connect(&config)?;

    match cmd {
        Commands::Chain(args) => chain::run(explorer, args).await,
        Commands::Mine => mine::run(explorer).await,
        Commands::Tx(args) => tx::run(explorer, args).await,
        Commands::Watch(_) => watch::run(explorer, &config).await,
    }
}

/// Resolve the client configuration from the global flags and the command.
fn client_config(api_url: &str, cmd: &Commands) -> ClientConfig {
    let config = ClientConfig::new(api_url);
    match cmd {
        Commands::Watch(args) => match args.poll_interval() {
            Some(interval) => config.with_poll_interval(interval),
            None => config,
        },
        _ => config,
    }
}

/// Build an explorer backed by the HTTP client, reporting to the terminal.
fn connect(config: &ClientConfig) -> Result<Arc<Explorer<ApiClient>>> {
    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);
    let api = ApiClient::new(config, notifier.clone())?;
    Ok(Arc::new(Explorer::new(api, notifier)))
}
