//! Caller-owned cache of enumerated installations.
//!
//! The registry scans lazily on first access and keeps the result until
//! [`InstallationRegistry::refresh`] or [`InstallationRegistry::invalidate`]
//! is called. There is no process-wide state: each registry owns its cache.

use std::path::Path;

use crate::config::DiscoveryConfig;
use crate::discovery;
use crate::installation::{EditorInstallation, KiroInstallation};
use crate::platform::PlatformFamily;

#[derive(Debug)]
pub struct InstallationRegistry {
    config: DiscoveryConfig,
    family: PlatformFamily,
    cached: Option<Vec<KiroInstallation>>,
    scans: usize,
}

impl InstallationRegistry {
    /// Registry for the current platform.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self::with_family(config, PlatformFamily::current())
    }

    /// Registry for an explicit platform family.
    pub fn with_family(config: DiscoveryConfig, family: PlatformFamily) -> Self {
        Self {
            config,
            family,
            cached: None,
            scans: 0,
        }
    }

    /// Installations, scanning first if nothing is cached.
    pub fn installations(&mut self) -> &[KiroInstallation] {
        if self.cached.is_none() {
            self.cached = Some(self.scan());
        }
        self.cached.as_deref().unwrap_or_default()
    }

    /// Drop the cache and scan again.
    pub fn refresh(&mut self) -> &[KiroInstallation] {
        self.invalidate();
        self.installations()
    }

    /// Drop the cache; the next access rescans.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Whether a scan result is currently cached.
    pub fn is_populated(&self) -> bool {
        self.cached.is_some()
    }

    /// Number of scans performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// First installation, in priority order.
    pub fn preferred(&mut self) -> Option<&KiroInstallation> {
        self.installations().first()
    }

    /// Look up a cached installation by path, scanning if needed.
    pub fn find_by_path(&mut self, path: &Path) -> Option<&KiroInstallation> {
        let wanted = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.installations().iter().find(|installation| {
            let have = dunce::canonicalize(installation.path())
                .unwrap_or_else(|_| installation.path().to_path_buf());
            have == wanted
        })
    }

    fn scan(&mut self) -> Vec<KiroInstallation> {
        self.scans += 1;
        discovery::enumerate_with_family(&self.config, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_install(dir: &Path) -> std::path::PathBuf {
        fs::create_dir_all(dir).unwrap();
        let exe = dir.join("kiro");
        fs::write(&exe, "").unwrap();
        exe
    }

    #[test]
    fn test_lazy_population() {
        let temp = TempDir::new().unwrap();
        make_install(temp.path());
        let config = DiscoveryConfig::with_roots_only([temp.path().to_path_buf()]);
        let mut registry = InstallationRegistry::with_family(config, PlatformFamily::Linux);

        assert!(!registry.is_populated());
        assert_eq!(registry.scan_count(), 0);

        assert_eq!(registry.installations().len(), 1);
        assert_eq!(registry.installations().len(), 1);
        assert_eq!(registry.scan_count(), 1);
    }

    #[test]
    fn test_refresh_sees_new_installation() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        make_install(&first);
        let config = DiscoveryConfig::with_roots_only([first, second.clone()]);
        let mut registry = InstallationRegistry::with_family(config, PlatformFamily::Linux);

        assert_eq!(registry.installations().len(), 1);

        make_install(&second);
        assert_eq!(registry.installations().len(), 1, "cache is kept until refresh");
        assert_eq!(registry.refresh().len(), 2);
        assert_eq!(registry.scan_count(), 2);
    }

    #[test]
    fn test_invalidate_defers_scan() {
        let config = DiscoveryConfig::with_roots_only(Vec::new());
        let mut registry = InstallationRegistry::with_family(config, PlatformFamily::Linux);
        registry.installations();
        registry.invalidate();

        assert!(!registry.is_populated());
        assert_eq!(registry.scan_count(), 1);
        assert!(registry.preferred().is_none());
        assert_eq!(registry.scan_count(), 2);
    }

    #[test]
    fn test_find_by_path() {
        let temp = TempDir::new().unwrap();
        let exe = make_install(temp.path());
        let config = DiscoveryConfig::with_roots_only([temp.path().to_path_buf()]);
        let mut registry = InstallationRegistry::with_family(config, PlatformFamily::Linux);

        let found = registry.find_by_path(&exe).unwrap();
        assert_eq!(found.name(), "Kiro");
        assert!(registry.find_by_path(&temp.path().join("other")).is_none());
    }
}
