//! `kiro probe <PATH>`

use std::path::Path;

use colored::Colorize;
use kiro_editor::{DiscoveryOutcome, EditorInstallation, discover_from_hint};
use serde_json::json;

use crate::error::{CliError, Result};

/// Run the probe command
pub fn run_probe(path: &Path, json: bool) -> Result<()> {
    let installation = match discover_from_hint(path) {
        DiscoveryOutcome::Found(installation) => installation,
        DiscoveryOutcome::Rejected(reason) => return Err(CliError::user(reason.to_string())),
    };

    if json {
        let doc = json!({
            "installation": installation,
            "supports_analyzers": installation.supports_analyzers(),
            "latest_language_version": installation.latest_language_version_supported().to_string(),
            "project_generator": installation.project_generator(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    super::list::print_installation(&installation, true);
    println!(
        "    {} {}",
        "manifest name:".dimmed(),
        installation.manifest_name().unwrap_or("-")
    );
    println!(
        "    {} C# {}",
        "language:".dimmed(),
        installation.latest_language_version_supported()
    );
    Ok(())
}
