//! `kiro list`

use colored::Colorize;
use kiro_editor::{DiscoveryConfig, EditorInstallation, InstallationRegistry, KiroInstallation};

use crate::error::Result;

/// Run the list command
pub fn run_list(config: DiscoveryConfig, json: bool) -> Result<()> {
    let mut registry = InstallationRegistry::new(config);
    let installations = registry.installations();

    if json {
        println!("{}", serde_json::to_string_pretty(installations)?);
        return Ok(());
    }

    if installations.is_empty() {
        println!("{}", "No Kiro installations found.".yellow());
        println!(
            "Set {} or add {} to your config.",
            kiro_editor::INSTALL_PATH_ENV.cyan(),
            "[discovery] search_roots".cyan()
        );
        return Ok(());
    }

    println!("{}", "Kiro installations".bold());
    println!();
    for (index, installation) in installations.iter().enumerate() {
        print_installation(installation, index == 0);
    }

    Ok(())
}

pub(crate) fn print_installation(installation: &KiroInstallation, preferred: bool) {
    let marker = if preferred { "*".green().bold() } else { " ".normal() };
    let channel = if installation.is_prerelease() {
        "prerelease".yellow()
    } else {
        "stable".green()
    };
    println!(
        "{} {:<28} {} ({})",
        marker,
        installation.name(),
        channel,
        installation.family()
    );
    println!("    {}", installation.path().display().to_string().dimmed());
}
