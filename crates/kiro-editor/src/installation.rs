//! The discovered-installation value object and the editor seam it plugs into.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::launcher::{self, LaunchRequest};
use crate::platform::PlatformFamily;
use crate::scaffold::{self, ScaffoldReport};
use crate::version::VersionInfo;
use crate::BRAND;

/// Highest C# language version the editor tooling understands.
pub const LATEST_LANGUAGE_VERSION: LanguageVersion = LanguageVersion::new(11, 0);

/// A `major.minor` language version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LanguageVersion {
    pub major: u32,
    pub minor: u32,
}

impl LanguageVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Shape of project files the external generator should emit for this editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectGenerator {
    /// SDK-style `.csproj` files.
    SdkStyle,
}

/// Operations a multi-editor registry needs from one installation.
///
/// Implemented by [`KiroInstallation`]; a registry that merges several
/// editor families can hold these as `Box<dyn EditorInstallation>`.
pub trait EditorInstallation: fmt::Debug {
    /// Display name, e.g. `Kiro [1.0.0 - Insider]`.
    fn name(&self) -> &str;

    /// Path to the executable or bundle.
    fn path(&self) -> &Path;

    /// Numeric version, when the manifest provided one.
    fn version(&self) -> Option<&semver::Version>;

    /// Whether this build is from a prerelease channel.
    fn is_prerelease(&self) -> bool;

    /// Whether Roslyn analyzers are supported.
    fn supports_analyzers(&self) -> bool;

    /// Highest supported language version.
    fn latest_language_version_supported(&self) -> LanguageVersion;

    /// Project-file shape the generator should use.
    fn project_generator(&self) -> ProjectGenerator;

    /// Open `file` at `line`/`column` within the workspace of `solution`.
    ///
    /// Returns `true` when the editor process was started.
    fn open(&self, file: Option<&Path>, line: i32, column: i32, solution: &Path) -> bool;

    /// Write default editor configuration into `project_dir`.
    fn create_extra_files(&self, project_dir: &Path) -> ScaffoldReport;
}

/// One discovered Kiro installation.
///
/// Immutable after construction. Equality and hashing consider only the
/// installation path.
#[derive(Debug, Clone, Serialize)]
pub struct KiroInstallation {
    name: String,
    path: PathBuf,
    version: Option<semver::Version>,
    is_prerelease: bool,
    family: PlatformFamily,
    manifest_name: Option<String>,
}

impl KiroInstallation {
    /// Assemble an installation from discovery results.
    ///
    /// Without a parsed version core the prerelease flag is cleared and the
    /// name falls back to the bare brand.
    pub(crate) fn new(
        path: PathBuf,
        family: PlatformFamily,
        version: Option<VersionInfo>,
        manifest_name: Option<String>,
    ) -> Self {
        let (name, version, is_prerelease) = match version.as_ref().and_then(|v| {
            v.display_suffix()
                .map(|suffix| (suffix, v.core.clone(), v.is_prerelease))
        }) {
            Some((suffix, core, is_prerelease)) => {
                (format!("{BRAND} [{suffix}]"), core, is_prerelease)
            }
            None => (BRAND.to_string(), None, false),
        };

        Self {
            name,
            path,
            version,
            is_prerelease,
            family,
            manifest_name,
        }
    }

    /// Platform family the installation was discovered under.
    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    /// Raw `name` field from the manifest, if there was one.
    pub fn manifest_name(&self) -> Option<&str> {
        self.manifest_name.as_deref()
    }

    /// Open with full error detail instead of a boolean.
    pub fn try_open(
        &self,
        file: Option<&Path>,
        line: i32,
        column: i32,
        solution: &Path,
    ) -> crate::Result<launcher::LaunchedProcess> {
        let request = LaunchRequest::new(file, line, column, solution);
        launcher::launch(self.family, &self.path, &request)
    }
}

impl EditorInstallation for KiroInstallation {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn version(&self) -> Option<&semver::Version> {
        self.version.as_ref()
    }

    fn is_prerelease(&self) -> bool {
        self.is_prerelease
    }

    fn supports_analyzers(&self) -> bool {
        true
    }

    fn latest_language_version_supported(&self) -> LanguageVersion {
        LATEST_LANGUAGE_VERSION
    }

    fn project_generator(&self) -> ProjectGenerator {
        ProjectGenerator::SdkStyle
    }

    fn open(&self, file: Option<&Path>, line: i32, column: i32, solution: &Path) -> bool {
        match self.try_open(file, line, column, solution) {
            Ok(process) => {
                tracing::debug!(pid = process.pid, installation = %self.name, "editor started");
                true
            }
            Err(err) => {
                tracing::error!(installation = %self.name, "{err}");
                false
            }
        }
    }

    fn create_extra_files(&self, project_dir: &Path) -> ScaffoldReport {
        scaffold::create_extra_files(project_dir)
    }
}

impl PartialEq for KiroInstallation {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for KiroInstallation {}

impl Hash for KiroInstallation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for KiroInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}
