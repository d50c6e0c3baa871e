//! blockwave CLI entry point.

use blockwave_client::DEFAULT_API_URL;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "blockwave")]
#[command(about = "Terminal explorer for a BlockWave blockchain backend", long_about = None)]
struct Cli {
    /// Base URL of the blockchain backend
    #[arg(long, global = true, env = "BLOCKWAVE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log filter, e.g. "debug" or "blockwave_client=trace"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, &cli.api_url).await {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("blockwave - Terminal explorer for a BlockWave blockchain backend");
            println!("Run 'blockwave --help' for usage information.");
        }
    }
}

// Logs go to stderr so they never interleave with the rendered chain.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tx() {
        let cli = Cli::try_parse_from([
            "blockwave", "--api-url", "http://node:5000", "tx", "-s", "alice", "-r", "bob", "-a", "2.5",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://node:5000");
        assert!(matches!(cli.command, Some(commands::Commands::Tx(_))));
    }

    #[test]
    fn test_watch_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["blockwave", "watch", "--interval", "0"]).is_err());
    }
}
