//! One-shot and interactive front ends.
use crate::args::Args;
use crate::parse;
use crate::render;
use clap::Parser;
use runout_equity::*;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

pub struct CLI;

impl CLI {
    /// Reads one query per line, in the same syntax as the command line,
    /// until `quit`, `exit`, end of input, or Ctrl+C at the prompt.
    pub async fn run() -> anyhow::Result<()> {
        log::info!("entering interactive mode");
        Self::serve(Self::stdin(), || async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }

    /// Prompt loop over any line source. A fresh `interrupt` is awaited
    /// per prompt, so a Ctrl+C that cancelled a calculation does not also
    /// end the session.
    async fn serve<F>(
        mut lines: tokio::sync::mpsc::Receiver<String>,
        interrupt: impl Fn() -> F,
    ) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()>,
    {
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let input = tokio::select! {
                line = lines.recv() => match line {
                    Some(line) => line,
                    None => break Ok(()),
                },
                _ = interrupt() => {
                    println!();
                    log::info!("interrupted at the prompt");
                    break Ok(());
                }
            };
            match input.trim() {
                "" => continue,
                "quit" => break Ok(()),
                "exit" => break Ok(()),
                line => match Args::try_parse_from(
                    std::iter::once("> ").chain(line.split_whitespace()),
                ) {
                    Err(e) => eprintln!("{}", e),
                    Ok(args) => match Self::handle(args).await {
                        Err(e) => eprintln!("{:#}", e),
                        Ok(_) => continue,
                    },
                },
            }
        }
    }

    /// Blocking stdin reads live on a detached thread so that neither
    /// the prompt nor runtime shutdown waits on them.
    fn stdin() -> tokio::sync::mpsc::Receiver<String> {
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        std::thread::spawn(move || {
            for line in std::io::stdin().lines() {
                match line {
                    Ok(line) => match tx.blocking_send(line).is_ok() {
                        true => continue,
                        false => break,
                    },
                    Err(e) => {
                        log::warn!("stdin: {}", e);
                        break;
                    }
                }
            }
        });
        rx
    }

    /// Validates, calculates, and prints one query.
    pub async fn handle(args: Args) -> anyhow::Result<()> {
        let table = parse::table(&args.hands, &args.board)?;
        let (equities, elapsed) = Self::calculate(table.clone()).await?;
        match args.json {
            true => println!("{}", render::Report::new(&table, &equities, elapsed).json()?),
            false => println!("{}", render::text(&table, &equities, elapsed)),
        }
        Ok(())
    }

    /// Runs the enumeration off the async workers. Ctrl+C cancels it.
    async fn calculate(table: Table) -> anyhow::Result<(Equities, Duration)> {
        let calculation = Calculation::new(table);
        let cancel = calculation.cancel();
        let start = Instant::now();
        let mut task = tokio::task::spawn_blocking(move || calculation.run(&Showdown));
        let equities = tokio::select! {
            joined = &mut task => joined?,
            _ = tokio::signal::ctrl_c() => {
                cancel.cancel();
                task.await?
            }
        };
        match equities {
            Some(equities) => Ok((equities, start.elapsed())),
            None => anyhow::bail!("calculation interrupted"),
        }
    }
}
