//! Single-entry extraction from tar.gz and zip archives.
//!
//! Tar is scanned as a forward-only stream and stops at the first match.
//! Zip needs its trailing central directory, so the whole body is buffered
//! before the lookup.

pub mod kind;
pub mod tar;
pub mod zip;

pub use kind::ArchiveKind;

use crate::error::Result;
use std::io::Read;

/// Content and permission bits of the one entry taken from an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub content: Vec<u8>,
    /// Permission bits recorded in the archive, if they can be trusted
    pub mode: Option<u32>,
}

/// Extract the entry named exactly `entry_path` from an archive stream
///
/// The first match in archive order wins. Fails with `Error::NotFound` when
/// the archive is readable but has no such file entry, and with
/// `Error::Format` when the archive itself cannot be read.
pub fn extract<R: Read>(kind: ArchiveKind, reader: R, entry_path: &str) -> Result<ExtractedEntry> {
    match kind {
        ArchiveKind::TarGzip => self::tar::extract_tar_gz_entry(reader, entry_path),
        ArchiveKind::Zip => self::zip::extract_zip_entry(reader, entry_path),
    }
}
