//! `kiro scaffold [PROJECT_DIR]`

use std::path::Path;

use colored::Colorize;
use kiro_editor::scaffold::create_extra_files;

use crate::error::{CliError, Result};

/// Run the scaffold command
pub fn run_scaffold(project_dir: &Path, json: bool) -> Result<()> {
    let report = create_extra_files(project_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for path in &report.created {
            println!("{} {}", "created".green(), path.display());
        }
        for path in &report.skipped {
            println!("{} {}", "exists ".dimmed(), path.display());
        }
        for (path, cause) in &report.failed {
            println!("{} {}: {}", "failed ".red(), path.display(), cause);
        }
    }

    if report.is_complete() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} scaffold file(s) could not be written",
            report.failed.len()
        )))
    }
}
