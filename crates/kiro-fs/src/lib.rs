//! Filesystem layer for the Kiro editor bridge
//!
//! Provides path-tagged I/O errors and the write primitives used when
//! scaffolding editor configuration into a project.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::WriteOutcome;
