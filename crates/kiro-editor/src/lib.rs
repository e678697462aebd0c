//! Kiro editor integration.
//!
//! Finds local Kiro installations, opens source locations in them, and
//! scaffolds the per-project editor configuration.
//!
//! # Architecture
//!
//! - [`platform`] knows the three on-disk layouts and default install
//!   locations.
//! - [`manifest`] and [`version`] turn an installation's `package.json` into
//!   a name and a classified version.
//! - [`discovery`] combines them into [`try_discover_installation`] and
//!   [`enumerate_installations`]; [`registry`] caches the latter.
//! - [`launcher`] builds and spawns the editor command line.
//! - [`scaffold`] writes the `.vscode` configuration files.
//!
//! Nothing here panics or returns an error for the core operations:
//! discovery yields a [`DiscoveryOutcome`], launching yields a boolean, and
//! scaffolding yields a [`ScaffoldReport`].

pub mod config;
pub mod discovery;
pub mod error;
pub mod installation;
pub mod launcher;
pub mod logging;
pub mod manifest;
pub mod platform;
pub mod registry;
pub mod scaffold;
pub mod version;

/// Brand name used in display names and diagnostics.
pub const BRAND: &str = "Kiro";

pub use config::DiscoveryConfig;
pub use discovery::{
    DiscoveryOutcome, RejectReason, discover_from_hint, enumerate_installations,
    try_discover_installation,
};
pub use error::{Error, Result};
pub use installation::{EditorInstallation, KiroInstallation, LanguageVersion, ProjectGenerator};
pub use launcher::{CommandSpec, LaunchRequest};
pub use platform::{INSTALL_PATH_ENV, PlatformFamily};
pub use registry::InstallationRegistry;
pub use scaffold::ScaffoldReport;
pub use version::VersionInfo;
