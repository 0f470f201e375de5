//! Export and import bundles
//!
//! A bundle is the whole local library (snippets, categories and tags) as
//! pretty-printed JSON, in the same camelCase shape the rest of the wire
//! format uses.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shared::{Category, SharedError, Snippet, Tag};

/// Everything the synchronizer holds, in one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Errors reading or writing a bundle file
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] SharedError),
}

impl ExportBundle {
    pub fn to_json(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the bundle to `path`, replacing any existing file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(
            "Exported {} snippets to {}",
            self.snippets.len(),
            path.display()
        );
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }
}
