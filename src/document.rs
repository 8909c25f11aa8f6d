use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target language for the analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Kz,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Kz => "kz",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unknown language code: {0} (expected en, ru or kz)")]
pub struct UnknownLanguage(String);

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "kz" => Ok(Self::Kz),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// An opaque user-supplied document awaiting analysis.
///
/// Immutable once constructed; each analysis call owns its document for the
/// duration of that call only.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
    declared_mime: Option<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, declared_mime: Option<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            declared_mime,
        }
    }

    /// Load a document from disk. No MIME type is declared; it will be
    /// inferred from the filename during extraction.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self {
            name,
            bytes,
            declared_mime: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn declared_mime(&self) -> Option<&str> {
        self.declared_mime.as_deref()
    }

    /// Lowercased filename extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }
}
