//! Default editor configuration for a project.
//!
//! Writes `.vscode/extensions.json`, `.vscode/settings.json` and
//! `.vscode/launch.json`. Existing files are never touched, so user
//! customizations survive repeated runs. I/O failures are logged and
//! recorded in the returned [`ScaffoldReport`], never raised.

use std::path::{Path, PathBuf};

use kiro_fs::WriteOutcome;
use serde::Serialize;
use serde_json::{Value, json};

/// Directory under the project that holds editor configuration.
pub const CONFIG_DIR: &str = ".vscode";

/// Extension providing Unity integration and the debugger.
pub const COMPANION_EXTENSION: &str = "visualstudiotoolsforunity.vstuc";

/// Debug adapter type contributed by the companion extension.
const DEBUGGER_TYPE: &str = "vstuc";

/// One of the files the scaffold writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldFile {
    Extensions,
    Settings,
    Launch,
}

impl ScaffoldFile {
    /// All scaffold files in write order.
    pub const ALL: [ScaffoldFile; 3] = [Self::Extensions, Self::Settings, Self::Launch];

    /// File name inside [`CONFIG_DIR`].
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Extensions => "extensions.json",
            Self::Settings => "settings.json",
            Self::Launch => "launch.json",
        }
    }

    /// Default document for a project directory.
    pub fn content(self, project_dir: &Path) -> Value {
        match self {
            Self::Extensions => extensions_json(),
            Self::Settings => settings_json(project_dir),
            Self::Launch => launch_json(),
        }
    }
}

/// What happened to each scaffold file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Files written by this call.
    pub created: Vec<PathBuf>,
    /// Files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Files (or the config directory) that could not be written, with the cause.
    pub failed: Vec<(PathBuf, String)>,
}

impl ScaffoldReport {
    /// True when nothing failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write the default configuration files into `project_dir`.
///
/// Never fails: every error is captured in the report.
pub fn create_extra_files(project_dir: &Path) -> ScaffoldReport {
    let mut report = ScaffoldReport::default();
    let config_dir = project_dir.join(CONFIG_DIR);

    if let Err(err) = kiro_fs::io::ensure_dir(&config_dir) {
        tracing::warn!(
            path = %config_dir.display(),
            error = %err,
            "cannot create editor config directory"
        );
        report.failed.push((config_dir, err.to_string()));
        return report;
    }

    for file in ScaffoldFile::ALL {
        let path = config_dir.join(file.file_name());
        let content = match serde_json::to_string_pretty(&file.content(project_dir)) {
            Ok(content) => content,
            Err(err) => {
                report.failed.push((path, err.to_string()));
                continue;
            }
        };

        match kiro_fs::io::write_text_new(&path, &content) {
            Ok(WriteOutcome::Created) => {
                tracing::debug!(path = %path.display(), "created");
                report.created.push(path);
            }
            Ok(WriteOutcome::Existing) => report.skipped.push(path),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot write editor config");
                report.failed.push((path, err.to_string()));
            }
        }
    }

    report
}

fn extensions_json() -> Value {
    json!({
        "recommendations": [COMPANION_EXTENSION]
    })
}

fn launch_json() -> Value {
    json!({
        "version": "0.2.0",
        "configurations": [
            {
                "name": "Attach to Unity",
                "type": DEBUGGER_TYPE,
                "request": "attach"
            }
        ]
    })
}

/// Glob patterns hidden from the file explorer.
const EXCLUDED_PATTERNS: &[&str] = &[
    "**/.DS_Store",
    "**/.git",
    "**/.vs",
    "**/.gitmodules",
    "**/.vsconfig",
    "**/*.booproj",
    "**/*.pidb",
    "**/*.suo",
    "**/*.user",
    "**/*.userprefs",
    "**/*.unityproj",
    "**/*.dll",
    "**/*.exe",
    "**/*.pdf",
    "**/*.mid",
    "**/*.midi",
    "**/*.wav",
    "**/*.gif",
    "**/*.ico",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.png",
    "**/*.psd",
    "**/*.tga",
    "**/*.tif",
    "**/*.tiff",
    "**/*.3ds",
    "**/*.3DS",
    "**/*.fbx",
    "**/*.FBX",
    "**/*.lxo",
    "**/*.LXO",
    "**/*.ma",
    "**/*.MA",
    "**/*.obj",
    "**/*.OBJ",
    "**/*.asset",
    "**/*.cubemap",
    "**/*.flare",
    "**/*.mat",
    "**/*.meta",
    "**/*.prefab",
    "**/*.unity",
    "build/",
    "Build/",
    "Library/",
    "library/",
    "obj/",
    "Obj/",
    "Logs/",
    "logs/",
    "ProjectSettings/",
    "UserSettings/",
    "temp/",
    "Temp/",
];

fn settings_json(project_dir: &Path) -> Value {
    let excludes: serde_json::Map<String, Value> = EXCLUDED_PATTERNS
        .iter()
        .map(|pattern| ((*pattern).to_string(), Value::Bool(true)))
        .collect();

    let mut settings = json!({
        "files.exclude": excludes,
        "files.associations": {
            "*.asset": "yaml",
            "*.meta": "yaml",
            "*.prefab": "yaml",
            "*.unity": "yaml"
        },
        "explorer.fileNesting.enabled": true,
        "explorer.fileNesting.patterns": {
            "*.sln": "*.csproj"
        }
    });

    match solution_name(project_dir) {
        Some(name) => settings["dotnet.defaultSolution"] = json!(name),
        None => tracing::warn!(
            path = %project_dir.display(),
            "cannot name the default solution for this directory"
        ),
    }

    settings
}

/// `<dir name>.sln` for the project directory.
///
/// Relative paths such as `.` or `Game/..` are resolved first so the name
/// comes from the directory they actually denote.
fn solution_name(project_dir: &Path) -> Option<String> {
    let resolved = dunce::canonicalize(project_dir)
        .or_else(|_| std::path::absolute(project_dir))
        .unwrap_or_else(|_| project_dir.to_path_buf());
    let name = resolved.file_name()?.to_str()?;
    Some(format!("{name}.sln"))
}
