//! Platform-specific installation layout.
//!
//! One logical installation has three on-disk shapes:
//!
//! | Family  | Root                 | Manifest                                          |
//! |---------|----------------------|---------------------------------------------------|
//! | Windows | `Kiro.exe`           | `<exe dir>/resources/app/package.json`            |
//! | MacOs   | `Kiro.app` bundle    | `<bundle>/Contents/Resources/app/package.json`    |
//! | Linux   | `kiro` executable    | `<exe dir>/resources/app/package.json`            |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an extra installation root to search.
pub const INSTALL_PATH_ENV: &str = "KIRO_INSTALL_PATH";

/// Manifest location relative to the resources directory.
const MANIFEST_SEGMENTS: [&str; 2] = ["app", "package.json"];

/// Platform family an installation is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// Executable file, resources beside it.
    Windows,
    /// Application bundle directory.
    MacOs,
    /// Executable file, resources beside it; Linux and other Unix targets.
    Linux,
}

impl PlatformFamily {
    /// The family of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Path to the manifest for an installation rooted at `root`.
    ///
    /// The manifest does not have to exist. On macOS both `Resources` and
    /// `resources` are accepted inside `Contents`, preferring whichever is
    /// present.
    pub fn manifest_path(self, root: &Path) -> PathBuf {
        let resources = match self {
            Self::Windows | Self::Linux => {
                let exe_dir = root.parent().unwrap_or_else(|| Path::new(""));
                exe_dir.join("resources")
            }
            Self::MacOs => {
                let contents = root.join("Contents");
                ["Resources", "resources"]
                    .iter()
                    .map(|segment| contents.join(segment))
                    .find(|dir| dir.is_dir())
                    .unwrap_or_else(|| contents.join("Resources"))
            }
        };
        MANIFEST_SEGMENTS
            .iter()
            .fold(resources, |path, segment| path.join(segment))
    }

    /// File or bundle names an installation root carries on this family.
    pub fn executable_names(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["Kiro.exe", "kiro.exe"],
            Self::MacOs => &["Kiro.app"],
            Self::Linux => &["kiro", "Kiro"],
        }
    }

    /// Whether `path` has the shape of an installation root for this family.
    pub fn is_installation_root(self, path: &Path) -> bool {
        match self {
            Self::Windows | Self::Linux => path.is_file(),
            Self::MacOs => path.is_dir() && has_app_extension(path),
        }
    }

    /// Turn a search hint into an installation root.
    ///
    /// The hint may be the root itself, a directory containing it, or (on
    /// macOS) a path somewhere inside a bundle. Returns `None` when nothing
    /// matching exists.
    pub fn resolve_root(self, hint: &Path) -> Option<PathBuf> {
        if self.is_installation_root(hint) {
            return Some(hint.to_path_buf());
        }

        if self == Self::MacOs {
            if let Some(bundle) = hint
                .ancestors()
                .skip(1)
                .find(|p| self.is_installation_root(p))
            {
                return Some(bundle.to_path_buf());
            }
        }

        if hint.is_dir() {
            return self
                .executable_names()
                .iter()
                .map(|name| hint.join(name))
                .find(|candidate| self.is_installation_root(candidate));
        }

        None
    }

    /// Conventional install locations, in probe order.
    ///
    /// Locations that depend on an unavailable home or data directory are
    /// left out. None of the returned paths are checked for existence.
    pub fn default_roots(self) -> Vec<PathBuf> {
        match self {
            Self::Windows => {
                let mut roots = Vec::new();
                if let Some(local) = dirs::data_local_dir() {
                    roots.push(local.join("Programs").join("Kiro").join("Kiro.exe"));
                }
                if let Some(program_files) = std::env::var_os("ProgramFiles") {
                    roots.push(PathBuf::from(program_files).join("Kiro").join("Kiro.exe"));
                }
                roots
            }
            Self::MacOs => {
                let mut roots = vec![PathBuf::from("/Applications/Kiro.app")];
                if let Some(home) = dirs::home_dir() {
                    roots.push(home.join("Applications").join("Kiro.app"));
                }
                roots
            }
            Self::Linux => {
                let mut roots: Vec<PathBuf> = [
                    "/usr/share/kiro/kiro",
                    "/usr/local/share/kiro/kiro",
                    "/opt/Kiro/kiro",
                    "/opt/kiro/kiro",
                ]
                .iter()
                .map(PathBuf::from)
                .collect();
                if let Some(data) = dirs::data_local_dir() {
                    roots.push(data.join("kiro").join("kiro"));
                }
                roots.push(PathBuf::from("/snap/kiro/current/usr/share/kiro/kiro"));
                roots
            }
        }
    }
}

impl std::fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        };
        f.write_str(name)
    }
}

fn has_app_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
}
