//! Show chain command.

use crate::render::render_chain;
use anyhow::Result;
use blockwave_client::ApiClient;
use blockwave_core::ChainResponse;
use blockwave_explorer::Explorer;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

#[derive(Args)]
pub struct ChainArgs {
    /// Only show the most recent blocks
    #[arg(short, long)]
    count: Option<usize>,

    /// Print the chain as JSON, oldest block first
    #[arg(long)]
    json: bool,
}

pub async fn run(explorer: Arc<Explorer<ApiClient>>, args: ChainArgs) -> Result<()> {
    explorer.refresh().await;
    let mut snapshot = explorer.snapshot();

    if args.json {
        let response = ChainResponse {
            length: snapshot.chain.len(),
            chain: snapshot.chain,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if let Some(count) = args.count {
        let skip = snapshot.chain.len().saturating_sub(count);
        snapshot.chain = snapshot.chain.split_off(skip);
    }

    println!();
    print!("{}", render_chain(&snapshot));

    if snapshot.chain.is_empty() {
        println!(
            "Use {} to mine the genesis block.",
            "blockwave mine".bright_cyan()
        );
        println!();
    }

    Ok(())
}
