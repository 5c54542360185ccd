//! Equity Binary
//!
//! Exact showdown equity for two or more hands on any partial board.
//!
//! Usage: equity AsKs QdQh --board 2h7hTc [--json]
//! With no hands, reads one query per line until `quit`.
mod args;
mod cli;
mod parse;
mod render;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runout_core::log()?;
    let args = args::Args::parse();
    match args.hands.is_empty() {
        true => cli::CLI::run().await,
        false => cli::CLI::handle(args).await,
    }
}
