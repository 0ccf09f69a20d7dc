// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! aliax - command alias and extension generator

mod commands;
mod env;
mod logging;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use commands::{clean, init, print};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "aliax",
    version,
    about = "Aliax - bash and PowerShell dispatchers from a command tree"
)]
struct Cli {
    /// Config file (default: named by aliax.work, else aliax.yaml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate scripts for every extension and command
    Init(init::InitArgs),
    /// Remove generated scripts and links
    Clean,
    /// Print one generated script to stdout
    Print(print::PrintArgs),
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context
/// isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand: print help and exit 0
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    logging::setup_logging(cli.verbose);

    let root = std::env::current_dir().context("failed to read current directory")?;
    let config_path = aliax_config::find_config(&root, cli.config.as_deref());
    tracing::debug!(config = %config_path.display(), "resolved config");

    match command {
        Commands::Init(args) => init::handle(args, &root, &config_path),
        Commands::Clean => clean::handle(&root, &config_path),
        Commands::Print(args) => print::handle(args, &config_path),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
