//! Mine block command.

use crate::render::render_chain;
use anyhow::{Context, Result};
use blockwave_client::ApiClient;
use blockwave_explorer::Explorer;
use colored::Colorize;
use std::sync::Arc;

pub async fn run(explorer: Arc<Explorer<ApiClient>>) -> Result<()> {
    println!("{}", "Mining...".bold().cyan());
    println!();

    let mined = explorer.mine().await.context("Failed to mine a new block")?;

    println!("  {}", mined.message);
    if let Some(block) = &mined.block {
        println!(
            "    Index: {}",
            block.index.to_string().bright_cyan()
        );
        println!(
            "    Proof: {}",
            block.proof.to_string().bright_cyan()
        );
    }
    println!();
    print!("{}", render_chain(&explorer.snapshot()));

    Ok(())
}
