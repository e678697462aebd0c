//! Version classification for editor builds.
//!
//! Editor manifests carry versions such as `1.0.0` or `1.0.0-insider`. The
//! part before the first `-` is the numeric core; the part after it names the
//! release channel. A build with a non-empty channel tag is a prerelease.
//!
//! # Examples
//!
//! ```
//! use kiro_editor::version::classify;
//!
//! let info = classify("1.0.0-insider");
//! assert!(info.is_prerelease);
//! assert_eq!(info.core, Some(semver::Version::new(1, 0, 0)));
//! assert_eq!(info.channel_label.as_deref(), Some("Insider"));
//!
//! let stable = classify("1.2");
//! assert!(!stable.is_prerelease);
//! assert_eq!(stable.core, Some(semver::Version::new(1, 2, 0)));
//! ```

use std::fmt;

/// Known channel tags and their display labels.
const CHANNEL_LABELS: &[(&str, &str)] = &[
    ("insider", "Insider"),
    ("insiders", "Insider"),
    ("beta", "Beta"),
    ("alpha", "Alpha"),
    ("nightly", "Nightly"),
    ("rc", "RC"),
    ("preview", "Preview"),
];

/// Result of classifying a raw version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Numeric `major.minor.patch` core, if it parsed.
    pub core: Option<semver::Version>,
    /// Whether a non-empty channel tag followed the core.
    pub is_prerelease: bool,
    /// Display word for the channel tag (e.g. `Insider`).
    pub channel_label: Option<String>,
}

impl VersionInfo {
    /// Format the bracketed part of a display name: `1.0.0` or `1.0.0 - Insider`.
    ///
    /// Returns `None` when the core did not parse.
    pub fn display_suffix(&self) -> Option<String> {
        let core = self.core.as_ref()?;
        let core = format!("{}.{}.{}", core.major, core.minor, core.patch);
        match (&self.channel_label, self.is_prerelease) {
            (Some(label), true) => Some(format!("{core} - {label}")),
            _ => Some(core),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_suffix() {
            Some(s) => f.write_str(&s),
            None => f.write_str("unknown"),
        }
    }
}

/// Classify a raw version string.
///
/// Never fails: a malformed core yields `core = None` while the channel tag
/// is still classified.
pub fn classify(raw: &str) -> VersionInfo {
    let raw = raw.trim();
    let (core_str, tag) = match raw.split_once('-') {
        Some((core, tag)) => (core, Some(tag.trim())),
        None => (raw, None),
    };

    let tag = tag.filter(|t| !t.is_empty());

    VersionInfo {
        core: parse_core(core_str),
        is_prerelease: tag.is_some(),
        channel_label: tag.map(channel_label),
    }
}

/// Parse `major.minor[.patch][+build]` into a semver version.
///
/// Two-component versions get a patch of `0`. Anything else is rejected.
fn parse_core(s: &str) -> Option<semver::Version> {
    let s = s.trim();
    let s = s.split_once('+').map_or(s, |(core, _build)| core);

    let parts: Vec<&str> = s.split('.').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    Some(semver::Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Map a channel tag to its display word.
///
/// Matching is case-insensitive on the first dot-separated segment, so
/// `insider.2` is still `Insider`. Unknown tags are capitalized as-is.
pub fn channel_label(tag: &str) -> String {
    let head = tag.split('.').next().unwrap_or(tag).to_ascii_lowercase();

    if let Some((_, label)) = CHANNEL_LABELS.iter().find(|(known, _)| *known == head) {
        return (*label).to_string();
    }

    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
