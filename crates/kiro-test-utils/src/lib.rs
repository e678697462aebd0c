//! Shared test fixtures for the kiro-bridge workspace.
//!
//! A dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`install`]: [`MockInstallation`] builder laying out a fake editor
//!   install on disk
//! - [`project`]: [`TestProject`], a temporary game project with a solution

pub mod install;
pub mod project;

pub use install::{Layout, MockInstallation};
pub use project::TestProject;
