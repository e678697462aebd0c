//! `kiro open <SOLUTION>`
//!
//! Launches the chosen installation at a file position within the
//! solution's workspace.

use std::path::Path;

use colored::Colorize;
use kiro_editor::{
    DiscoveryConfig, DiscoveryOutcome, EditorInstallation, InstallationRegistry,
    KiroInstallation, discover_from_hint,
};

use crate::error::{CliError, Result};

/// Run the open command
pub fn run_open(
    config: DiscoveryConfig,
    solution: &Path,
    file: Option<&Path>,
    line: i32,
    column: i32,
    install: Option<&Path>,
) -> Result<()> {
    let installation = resolve_installation(config, install)?;

    let process = installation.try_open(file, line, column, solution)?;
    tracing::debug!(pid = process.pid, "editor process started");

    println!(
        "{} {} in {}",
        "Opened".green().bold(),
        file.unwrap_or(solution).display(),
        installation.name().cyan()
    );
    Ok(())
}

fn resolve_installation(
    config: DiscoveryConfig,
    install: Option<&Path>,
) -> Result<KiroInstallation> {
    if let Some(path) = install {
        return match discover_from_hint(path) {
            DiscoveryOutcome::Found(installation) => Ok(installation),
            DiscoveryOutcome::Rejected(reason) => Err(CliError::user(reason.to_string())),
        };
    }

    let mut registry = InstallationRegistry::new(config);
    registry.preferred().cloned().ok_or_else(|| {
        CliError::user(format!(
            "No Kiro installation found. Pass --install or set {}.",
            kiro_editor::INSTALL_PATH_ENV
        ))
    })
}
