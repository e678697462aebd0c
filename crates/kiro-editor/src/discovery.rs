//! Installation discovery.
//!
//! [`try_discover_installation`] inspects a single root; the only way it can
//! fail is a root that is empty or does not exist. Missing or corrupt
//! manifests still produce an installation, named after the bare brand.
//! [`enumerate_installations`] runs it over every candidate root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::DiscoveryConfig;
use crate::installation::KiroInstallation;
use crate::manifest;
use crate::platform::PlatformFamily;
use crate::version;

/// Why a root was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No path, or an empty one.
    Empty,
    /// Nothing exists at the path.
    Missing(PathBuf),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("no installation path given"),
            Self::Missing(path) => write!(f, "nothing installed at {}", path.display()),
        }
    }
}

/// Result of probing one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    Found(KiroInstallation),
    Rejected(RejectReason),
}

impl DiscoveryOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn installation(&self) -> Option<&KiroInstallation> {
        match self {
            Self::Found(installation) => Some(installation),
            Self::Rejected(_) => None,
        }
    }

    pub fn into_installation(self) -> Option<KiroInstallation> {
        match self {
            Self::Found(installation) => Some(installation),
            Self::Rejected(_) => None,
        }
    }
}

/// Discover an installation at `path` using the current platform's layout.
pub fn try_discover_installation(path: Option<&Path>) -> DiscoveryOutcome {
    discover_with_family(path, PlatformFamily::current())
}

/// Discover an installation at `path` laid out for `family`.
pub fn discover_with_family(path: Option<&Path>, family: PlatformFamily) -> DiscoveryOutcome {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return DiscoveryOutcome::Rejected(RejectReason::Empty);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "installation path does not exist");
        return DiscoveryOutcome::Rejected(RejectReason::Missing(path.to_path_buf()));
    }

    let path = absolute(path);
    let manifest_path = family.manifest_path(&path);
    let fields = manifest::read(&manifest_path);
    let version = fields.version.as_deref().map(version::classify);

    let installation = KiroInstallation::new(path, family, version, fields.name);
    tracing::debug!(%installation, "discovered installation");
    DiscoveryOutcome::Found(installation)
}

/// Discover an installation from a search hint using the current platform.
///
/// Unlike [`try_discover_installation`], the hint may be a directory holding
/// the executable (or, on macOS, a path inside the bundle); it is resolved
/// with [`PlatformFamily::resolve_root`] first. A hint that resolves to
/// nothing is rejected as missing.
pub fn discover_from_hint(hint: &Path) -> DiscoveryOutcome {
    discover_hint_with_family(hint, PlatformFamily::current())
}

/// [`discover_from_hint`] for an explicit platform family.
pub fn discover_hint_with_family(hint: &Path, family: PlatformFamily) -> DiscoveryOutcome {
    if hint.as_os_str().is_empty() {
        return DiscoveryOutcome::Rejected(RejectReason::Empty);
    }

    match family.resolve_root(hint) {
        Some(root) => discover_with_family(Some(&root), family),
        None => {
            tracing::debug!(hint = %hint.display(), "hint does not resolve to an installation");
            DiscoveryOutcome::Rejected(RejectReason::Missing(hint.to_path_buf()))
        }
    }
}

/// Candidate roots in priority order: environment override, configured
/// roots, then platform defaults. Only roots that resolve to something on
/// disk are returned.
pub fn candidate_roots(config: &DiscoveryConfig, family: PlatformFamily) -> Vec<PathBuf> {
    let defaults = if config.include_default_locations {
        family.default_roots()
    } else {
        Vec::new()
    };

    config
        .env_override
        .iter()
        .chain(&config.search_roots)
        .chain(&defaults)
        .filter_map(|hint| family.resolve_root(hint))
        .collect()
}

/// Discover every installation reachable from `config`.
///
/// Duplicates (the same installation reached through different hints) are
/// dropped, keeping the first. Never fails; nothing installed is an empty
/// vector.
pub fn enumerate_installations(config: &DiscoveryConfig) -> Vec<KiroInstallation> {
    enumerate_with_family(config, PlatformFamily::current())
}

/// [`enumerate_installations`] for an explicit platform family.
pub fn enumerate_with_family(
    config: &DiscoveryConfig,
    family: PlatformFamily,
) -> Vec<KiroInstallation> {
    let mut seen = HashSet::new();
    let mut installations = Vec::new();

    for root in candidate_roots(config, family) {
        let key = dunce::canonicalize(&root).unwrap_or_else(|_| absolute(&root));
        if !seen.insert(key) {
            continue;
        }
        if let DiscoveryOutcome::Found(installation) = discover_with_family(Some(&root), family) {
            installations.push(installation);
        }
    }

    tracing::info!(count = installations.len(), "installation scan complete");
    installations
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
