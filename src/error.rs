use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, fetching, extracting or writing an entry
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid template '{template}': {reason}")]
    Template { template: String, reason: String },

    #[error(
        "unsupported archive '{url}': only tar-gzipped files with tar.gz or tgz suffix, or zipped files with zip suffix are supported"
    )]
    UnsupportedFormat { url: String },

    #[error("failed to retrieve {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to retrieve archive {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {archive} archive while looking for '{entry}'")]
    Format {
        archive: String,
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to find '{entry}' in {archive} archive")]
    NotFound { archive: String, entry: String },

    #[error("{context}: {}", .path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to configure TLS: {0}")]
    Tls(String),

    #[error("unable to determine platform: {0}")]
    Platform(String),
}

impl Error {
    pub fn template(template: &str, reason: impl Into<String>) -> Self {
        Error::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// The archive was readable but did not contain the requested entry
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// The archive container or its compression envelope is corrupt
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
