//! Fake editor installations in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Script written as the mock executable. Starts and exits immediately.
const EXECUTABLE_SCRIPT: &str = "#!/bin/sh\nexit 0\n";

/// On-disk shape of a mock installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `kiro/kiro.exe` with `kiro/resources/app/package.json`.
    Windows,
    /// `Kiro.app/Contents/Resources/app/package.json`.
    MacOs,
    /// `kiro-installation/kiro` with `kiro-installation/resources/app/package.json`.
    Linux,
}

impl Layout {
    /// Layout matching the host operating system.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }
}

#[derive(Debug, Clone)]
enum Manifest {
    Fields {
        name: Option<String>,
        version: Option<String>,
    },
    Raw(String),
    Absent,
}

/// A mock installation living in its own temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use kiro_test_utils::{Layout, MockInstallation};
///
/// let install = MockInstallation::builder(Layout::Linux)
///     .version("1.0.0-insider")
///     .build();
/// assert!(install.root().exists());
/// ```
pub struct MockInstallation {
    temp_dir: TempDir,
    layout: Layout,
    root: PathBuf,
    manifest_path: PathBuf,
}

impl MockInstallation {
    /// Start building a mock for `layout`.
    pub fn builder(layout: Layout) -> MockInstallationBuilder {
        MockInstallationBuilder {
            layout,
            manifest: Manifest::Fields {
                name: Some("kiro".to_string()),
                version: None,
            },
        }
    }

    /// Host-layout installation reporting `version`.
    pub fn with_version(version: &str) -> Self {
        Self::builder(Layout::host()).version(version).build()
    }

    /// The path discovery should be given: executable or bundle.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the manifest lives (or would live).
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// The temporary directory holding the installation.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Overwrite the manifest with `content`.
    pub fn write_manifest(&self, content: &str) {
        fs::create_dir_all(self.manifest_path.parent().unwrap()).unwrap();
        fs::write(&self.manifest_path, content).unwrap();
    }

    /// Delete the installation root so launching it fails.
    pub fn remove_root(&self) {
        if self.root.is_dir() {
            fs::remove_dir_all(&self.root).unwrap();
        } else {
            fs::remove_file(&self.root).unwrap();
        }
    }
}

/// Builder for [`MockInstallation`].
pub struct MockInstallationBuilder {
    layout: Layout,
    manifest: Manifest,
}

impl MockInstallationBuilder {
    /// Set the manifest `version` field.
    pub fn version(mut self, version: &str) -> Self {
        if let Manifest::Fields { version: v, .. } = &mut self.manifest {
            *v = Some(version.to_string());
        } else {
            self.manifest = Manifest::Fields {
                name: Some("kiro".to_string()),
                version: Some(version.to_string()),
            };
        }
        self
    }

    /// Set the manifest `name` field.
    pub fn name(mut self, name: &str) -> Self {
        if let Manifest::Fields { name: n, .. } = &mut self.manifest {
            *n = Some(name.to_string());
        }
        self
    }

    /// Write `content` verbatim as the manifest.
    pub fn raw_manifest(mut self, content: &str) -> Self {
        self.manifest = Manifest::Raw(content.to_string());
        self
    }

    /// Write a manifest that is not valid JSON.
    pub fn corrupt_manifest(self) -> Self {
        self.raw_manifest("{ invalid json content")
    }

    /// Do not write a manifest at all.
    pub fn without_manifest(mut self) -> Self {
        self.manifest = Manifest::Absent;
        self
    }

    pub fn build(self) -> MockInstallation {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        let (root, resources, executable) = match self.layout {
            Layout::Windows => {
                let dir = base.join("kiro");
                let exe = dir.join("kiro.exe");
                (exe.clone(), dir.join("resources"), exe)
            }
            Layout::Linux => {
                let dir = base.join("kiro-installation");
                let exe = dir.join("kiro");
                (exe.clone(), dir.join("resources"), exe)
            }
            Layout::MacOs => {
                let bundle = base.join("Kiro.app");
                let contents = bundle.join("Contents");
                let exe = contents.join("MacOS").join("Kiro");
                (bundle, contents.join("Resources"), exe)
            }
        };

        let app_dir = resources.join("app");
        fs::create_dir_all(&app_dir).unwrap();
        write_executable(&executable);

        let manifest_path = app_dir.join("package.json");
        match &self.manifest {
            Manifest::Fields { name, version } => {
                let mut doc = serde_json::Map::new();
                if let Some(name) = name {
                    doc.insert("name".into(), name.clone().into());
                }
                if let Some(version) = version {
                    doc.insert("version".into(), version.clone().into());
                }
                let content = serde_json::to_string_pretty(&doc).unwrap();
                fs::write(&manifest_path, content).unwrap();
            }
            Manifest::Raw(content) => fs::write(&manifest_path, content).unwrap(),
            Manifest::Absent => {}
        }

        MockInstallation {
            temp_dir,
            layout: self.layout,
            root,
            manifest_path,
        }
    }
}

fn write_executable(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, EXECUTABLE_SCRIPT).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_layout() {
        let install = MockInstallation::builder(Layout::Linux).version("1.0.0").build();
        assert!(install.root().is_file());
        assert!(install.root().ends_with("kiro-installation/kiro"));
        assert!(
            install
                .manifest_path()
                .ends_with("kiro-installation/resources/app/package.json")
        );
        let text = fs::read_to_string(install.manifest_path()).unwrap();
        assert!(text.contains("\"1.0.0\""));
    }

    #[test]
    fn test_macos_layout_is_bundle() {
        let install = MockInstallation::builder(Layout::MacOs).build();
        assert!(install.root().is_dir());
        assert!(install.root().join("Contents/MacOS/Kiro").is_file());
        assert!(install.manifest_path().is_file());
    }

    #[test]
    fn test_without_manifest() {
        let install = MockInstallation::builder(Layout::Windows)
            .without_manifest()
            .build();
        assert!(install.root().is_file());
        assert!(!install.manifest_path().exists());
        assert!(install.manifest_path().parent().unwrap().is_dir());
    }

    #[test]
    fn test_remove_root() {
        let install = MockInstallation::builder(Layout::Linux).build();
        install.remove_root();
        assert!(!install.root().exists());
    }
}
