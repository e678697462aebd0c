//! Kiro editor bridge CLI
//!
//! Lists installations, probes a single root, opens solutions, and writes
//! project scaffolding.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use kiro_editor::DiscoveryConfig;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence over both defaults.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = kiro_editor::logging::init_with_default(default_filter) {
        eprintln!("{} logging not initialized: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(verbose = cli.verbose, "logging initialized");

    let config = match &cli.config {
        Some(path) => DiscoveryConfig::load(path)?.with_env(),
        None => DiscoveryConfig::load_default(),
    };

    match cli.command {
        Commands::List { json } => commands::run_list(config, json),
        Commands::Probe { path, json } => commands::run_probe(&path, json),
        Commands::Open {
            solution,
            file,
            line,
            column,
            install,
        } => commands::run_open(
            config,
            &solution,
            file.as_deref(),
            line,
            column,
            install.as_deref(),
        ),
        Commands::Scaffold { project_dir, json } => commands::run_scaffold(&project_dir, json),
    }
}
