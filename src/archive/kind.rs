use crate::error::{Error, Result};
use std::fmt;

/// Container formats an archive can be extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGzip,
    Zip,
}

impl ArchiveKind {
    /// Classify an archive by the suffix of its URL (case-insensitive)
    pub fn from_url(url: &str) -> Result<Self> {
        let lower = url.to_lowercase();
        if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Ok(ArchiveKind::TarGzip)
        } else if lower.ends_with(".zip") {
            Ok(ArchiveKind::Zip)
        } else {
            Err(Error::UnsupportedFormat {
                url: url.to_string(),
            })
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveKind::TarGzip => write!(f, "tar.gz"),
            ArchiveKind::Zip => write!(f, "zip"),
        }
    }
}
