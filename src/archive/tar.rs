use crate::archive::{ArchiveKind, ExtractedEntry};
use crate::error::{Error, Result};
use flate2::read::MultiGzDecoder;
use log::debug;
use std::io::{self, Read};
use tar::Archive;

/// Extract a single entry from a TAR.GZ stream
///
/// The gzip envelope is decoded lazily and tar headers are read one at a
/// time, so nothing past the matching entry is consumed. A stream made of
/// several concatenated gzip members is decoded as one tar stream.
pub fn extract_tar_gz_entry<R: Read>(reader: R, entry_path: &str) -> Result<ExtractedEntry> {
    let decoder = MultiGzDecoder::new(reader);
    extract_tar_entry_from_reader(decoder, entry_path, ArchiveKind::TarGzip)
}

/// Scan a TAR stream for the first file entry named exactly `entry_path`
fn extract_tar_entry_from_reader<R: Read>(
    reader: R,
    entry_path: &str,
    kind: ArchiveKind,
) -> Result<ExtractedEntry> {
    let format_error = |source: io::Error| Error::Format {
        archive: kind.to_string(),
        entry: entry_path.to_string(),
        source,
    };

    let mut archive = Archive::new(reader);

    for entry in archive.entries().map_err(format_error)? {
        let mut entry = entry.map_err(format_error)?;

        // Raw header bytes: no normalization of "./" prefixes or case
        if *entry.path_bytes() != *entry_path.as_bytes() {
            continue;
        }

        let entry_type = entry.header().entry_type();
        if !entry_type.is_file() {
            debug!("Skipping {entry_path}: {entry_type:?} entry is not a file");
            continue;
        }

        // setuid, setgid and sticky bits are never carried over
        let mode = entry.header().mode().ok().map(|mode| mode & 0o777);

        let mut content = Vec::new();
        entry.read_to_end(&mut content).map_err(format_error)?;

        return Ok(ExtractedEntry { content, mode });
    }

    Err(Error::NotFound {
        archive: kind.to_string(),
        entry: entry_path.to_string(),
    })
}
