//! Terminal rendering of blocks and the chain view.
//!
//! Everything here is derived from its input; nothing is fetched or cached.

use blockwave_core::{format_timestamp_in, party_label, Block, Transaction};
use blockwave_explorer::ExplorerSnapshot;
use chrono::{Local, TimeZone};
use colored::Colorize;
use std::fmt::{Display, Write};

/// Render one block card with timestamps in `tz`.
pub fn render_block_in<Tz>(block: &Block, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  {}  {}",
        format!("Block #{}", block.index).bold().cyan(),
        format_timestamp_in(block.timestamp, tz).bright_black()
    );
    let _ = writeln!(
        out,
        "    {} {}",
        label("Proof of Work:"),
        block.proof.to_string().bright_cyan()
    );
    let _ = writeln!(
        out,
        "    {} {}",
        label("Prev Hash:"),
        block.previous_hash.bright_yellow()
    );
    let _ = writeln!(
        out,
        "    {}",
        format!("Transactions ({})", block.tx_count()).bold()
    );

    if block.transactions.is_empty() {
        let _ = writeln!(out, "      {}", "No transactions".bright_black());
    } else {
        for tx in &block.transactions {
            out.push_str(&render_transaction(tx));
        }
    }

    out
}

fn render_transaction(tx: &Transaction) -> String {
    format!(
        "      {} {}\n      {} {}\n      {} {}\n",
        tx_label("From:"),
        party_label(&tx.sender).bright_yellow(),
        tx_label("To:"),
        party_label(&tx.recipient).bright_yellow(),
        tx_label("Amount:"),
        tx.amount.to_string().bright_cyan()
    )
}

fn label(text: &str) -> colored::ColoredString {
    format!("{:<14}", text).bold()
}

fn tx_label(text: &str) -> colored::ColoredString {
    format!("{:<7}", text).bright_black()
}

/// Render the chain section: header, then every block newest first.
pub fn render_chain(snapshot: &ExplorerSnapshot) -> String {
    render_chain_in(snapshot, &Local)
}

pub fn render_chain_in<Tz>(snapshot: &ExplorerSnapshot, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        "Blockchain".bold().cyan(),
        format!("{} blocks", snapshot.chain.len()).bright_black()
    );
    let _ = writeln!(out);

    if snapshot.chain.is_empty() {
        if snapshot.loading {
            let _ = writeln!(out, "  {}", "Loading blockchain...".bright_black());
        } else {
            let _ = writeln!(
                out,
                "  {}",
                "No blocks found in the blockchain.".yellow()
            );
        }
        return out;
    }

    for block in snapshot.newest_first() {
        out.push_str(&render_block_in(block, tz));
        let _ = writeln!(out);
    }
    out
}
