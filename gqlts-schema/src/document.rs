//! Operation documents handed to plugins alongside the schema.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// A query document file supplied by the host.
///
/// The schema-level generators in this workspace receive documents but do not
/// inspect them; operation-level generators do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    /// Path the document was loaded from.
    pub file_path: PathBuf,
    /// Raw GraphQL source.
    pub content: String,
}

impl DocumentFile {
    pub fn new(file_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Ok(Self::new(path, content))
    }
}
