//! `timesheet` command-line tool.
//!
//! Usage:
//!   timesheet format-time 1.5
//!   timesheet ids --main-key client < clients.json
//!   timesheet parse-date "3 days ago"
//!
//! Logs go to stderr; results go to stdout.

use anyhow::Result;
use clap::Parser;
use timesheet_cli::{run, Cli};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!(command = ?cli.command, "running");
    let output = run(&cli.command, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}
