//! Create transaction command.

use crate::render::render_chain;
use anyhow::{bail, Result};
use blockwave_client::ApiClient;
use blockwave_explorer::{Explorer, SubmitOutcome, TransactionForm};
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

#[derive(Args)]
pub struct TxArgs {
    /// Sender address
    #[arg(short, long, default_value = "")]
    sender: String,

    /// Recipient address
    #[arg(short, long, default_value = "")]
    recipient: String,

    /// Amount to send (positive number)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    amount: String,
}

pub async fn run(explorer: Arc<Explorer<ApiClient>>, args: TxArgs) -> Result<()> {
    println!("{}", "Creating transaction...".bold().cyan());
    println!();
    println!("  Sender:    {}", args.sender.bright_yellow());
    println!("  Recipient: {}", args.recipient.bright_yellow());
    println!("  Amount:    {}", args.amount.bright_cyan());
    println!();

    let mut form = TransactionForm::filled(args.sender, args.recipient, args.amount);

    match form.submit(explorer.as_ref()).await {
        SubmitOutcome::Submitted(response) => {
            println!("  {}", response.message);
            println!();
            print!("{}", render_chain(&explorer.snapshot()));
            println!(
                "Use {} to include it in a block.",
                "blockwave mine".bright_cyan()
            );
            Ok(())
        }
        SubmitOutcome::Invalid(e) => bail!("Invalid transaction: {}", e),
        SubmitOutcome::Failed => bail!("Transaction was not accepted by the backend"),
    }
}
