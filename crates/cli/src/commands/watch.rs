//! Interactive explorer command.
//!
//! Redraws the chain on every state change and reads single-letter commands
//! from stdin. Mining runs in the background so the page keeps refreshing
//! while the backend works.

use crate::render::render_chain;
use anyhow::Result;
use blockwave_client::{ApiClient, ClientConfig, NotificationKind};
use blockwave_explorer::{Explorer, ExplorerError, SubmitOutcome, TransactionForm};
use clap::Args;
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

type Input = Lines<BufReader<Stdin>>;

#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between background refreshes [default: 10]
    #[arg(
        short,
        long,
        env = "BLOCKWAVE_POLL_INTERVAL",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval: Option<u64>,
}

impl WatchArgs {
    /// Poll period requested on the command line, if any.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.interval.map(Duration::from_secs)
    }
}

pub async fn run(explorer: Arc<Explorer<ApiClient>>, config: &ClientConfig) -> Result<()> {
    let api_url = config.base_url.as_str();
    let poller = explorer.activate(config.poll_interval).await;
    let mut changes = explorer.subscribe();
    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();

    draw(&explorer, api_url);

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&explorer, api_url);
            }
            line = input.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.trim() {
                    "m" | "mine" => spawn_mine(&explorer),
                    "t" | "tx" => {
                        transaction_modal(&explorer, &mut input).await?;
                        draw(&explorer, api_url);
                    }
                    "r" | "refresh" => spawn_refresh(&explorer),
                    "q" | "quit" => break,
                    "" => draw(&explorer, api_url),
                    other => {
                        explorer.notifier().notify(
                            NotificationKind::Error,
                            "Unknown command",
                            other,
                        );
                    }
                }
            }
        }
    }

    poller.cancel();
    Ok(())
}

fn spawn_mine(explorer: &Arc<Explorer<ApiClient>>) {
    let explorer = Arc::clone(explorer);
    tokio::spawn(async move {
        match explorer.mine().await {
            Ok(_) => {}
            Err(ExplorerError::MiningInProgress) => explorer.notifier().notify(
                NotificationKind::Error,
                "Busy",
                "A block is already being mined",
            ),
            // Already reported by the API client.
            Err(e) => debug!(error = %e, "mine action failed"),
        }
    });
}

fn spawn_refresh(explorer: &Arc<Explorer<ApiClient>>) {
    let explorer = Arc::clone(explorer);
    tokio::spawn(async move {
        explorer.refresh().await;
    });
}

/// Collect the three fields and submit until the backend accepts the
/// transaction or the user gives up.
async fn transaction_modal(explorer: &Explorer<ApiClient>, input: &mut Input) -> Result<()> {
    let mut form = TransactionForm::new();
    form.open();

    println!();
    println!("{}", "Create New Transaction".bold().cyan());
    println!("{}", "Press Enter to keep the value in brackets.".bright_black());

    while form.is_open() {
        let Some(sender) = prompt(input, "From (Sender)", &form.sender).await? else {
            return Ok(());
        };
        let Some(recipient) = prompt(input, "To (Recipient)", &form.recipient).await? else {
            return Ok(());
        };
        let Some(amount) = prompt(input, "Amount", &form.amount).await? else {
            return Ok(());
        };
        form.sender = sender;
        form.recipient = recipient;
        form.amount = amount;

        println!("{}", "Processing...".bright_black());
        match form.submit(explorer).await {
            SubmitOutcome::Submitted(response) => {
                println!("{}  {}", "✓".green().bold(), response.message);
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed => {
                let retry = prompt(input, "Try again? [Y/n]", "y").await?;
                if !matches!(retry.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
                    form.close();
                }
            }
        }
    }

    Ok(())
}

/// Read one line, falling back to `current` on empty input. `None` on EOF.
async fn prompt(input: &mut Input, label: &str, current: &str) -> Result<Option<String>> {
    if current.is_empty() {
        print!("  {}: ", label.bold());
    } else {
        print!("  {} [{}]: ", label.bold(), current.bright_yellow());
    }
    std::io::stdout().flush()?;

    Ok(input.next_line().await?.map(|line| {
        if line.trim().is_empty() {
            current.to_string()
        } else {
            line
        }
    }))
}

fn draw(explorer: &Explorer<ApiClient>, api_url: &str) {
    let snapshot = explorer.snapshot();

    // Clear screen, cursor home.
    print!("\x1B[2J\x1B[H");
    println!(
        "{}  {}",
        "BlockWave Explorer".bold().cyan(),
        api_url.bright_black()
    );
    if snapshot.mining {
        println!("{}", "Mining...".yellow().bold());
    }
    println!();
    print!("{}", render_chain(&snapshot));
    println!(
        "{}",
        "[m] mine  [t] new transaction  [r] refresh  [q] quit".bright_black()
    );
    let _ = std::io::stdout().flush();
}
