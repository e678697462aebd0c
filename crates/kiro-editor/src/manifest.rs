//! Reading the `package.json` manifest bundled with an editor distribution.
//!
//! A missing or corrupt manifest is not an error: it degrades to "no
//! metadata" so discovery can still succeed.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Fields recovered from a manifest. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestFields {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ManifestFields {
    /// True when neither field was recovered.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }
}

/// Read `name` and `version` from the manifest at `path`.
///
/// I/O failures and malformed JSON both yield empty fields.
pub fn read(path: &Path) -> ManifestFields {
    match try_read(path) {
        Ok(fields) => fields,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "manifest unavailable");
            ManifestFields::default()
        }
    }
}

/// Read the manifest, propagating I/O and parse failures.
pub fn try_read(path: &Path) -> Result<ManifestFields> {
    let bytes = kiro_fs::io::read_bytes(path)?;
    let document: Value = serde_json::from_slice(&bytes)?;
    Ok(extract(&document))
}

/// Pull string-valued `name`/`version` out of a parsed document.
fn extract(document: &Value) -> ManifestFields {
    let field = |key: &str| {
        document
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    ManifestFields {
        name: field("name"),
        version: field("version"),
    }
}
