use crate::archive::{ArchiveKind, ExtractedEntry};
use crate::error::{Error, Result};
use std::io::{self, Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipError;

/// Extract a single entry from a ZIP stream
///
/// The central directory sits at the end of the archive, so the whole body
/// is read into memory before the lookup.
pub fn extract_zip_entry<R: Read>(mut reader: R, entry_path: &str) -> Result<ExtractedEntry> {
    let format_error = |source: io::Error| Error::Format {
        archive: ArchiveKind::Zip.to_string(),
        entry: entry_path.to_string(),
        source,
    };
    let zip_format_error = |err: ZipError| format_error(err.into());

    let mut body = Vec::new();
    reader.read_to_end(&mut body).map_err(format_error)?;

    let mut archive = ZipArchive::new(Cursor::new(body)).map_err(zip_format_error)?;

    // Directory order, first match wins
    let mut found = None;
    for i in 0..archive.len() {
        let file = archive.by_index_raw(i).map_err(zip_format_error)?;
        if !file.is_dir() && file.name() == entry_path {
            found = Some(i);
            break;
        }
    }

    let Some(index) = found else {
        return Err(Error::NotFound {
            archive: ArchiveKind::Zip.to_string(),
            entry: entry_path.to_string(),
        });
    };

    let mut file = archive.by_index(index).map_err(zip_format_error)?;
    let mode = executable_mode(file.unix_mode());

    let mut content = Vec::with_capacity(file.size().min(64 * 1024 * 1024) as usize);
    file.read_to_end(&mut content).map_err(format_error)?;

    Ok(ExtractedEntry { content, mode })
}

/// Keep recorded permissions only when they carry an execute bit.
///
/// Archives written on DOS-like hosts report a synthesized 0o664, which
/// would strip the executable bit from the installed file. Special bits
/// (setuid, setgid, sticky) are dropped.
fn executable_mode(unix_mode: Option<u32>) -> Option<u32> {
    unix_mode
        .map(|mode| mode & 0o777)
        .filter(|mode| mode & 0o111 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::testutil;
    use std::io::Write;

    #[test]
    fn test_extracts_content() {
        let archive = testutil::zip(&[
            ("README.txt", 0o644, b"readme"),
            ("tool.exe", 0o755, b"MZ binary content"),
        ]);

        let entry = extract_zip_entry(archive.as_slice(), "tool.exe").unwrap();
        assert_eq!(entry.content, b"MZ binary content");
        assert_eq!(entry.mode, Some(0o755));
    }

    #[test]
    fn test_nested_entry() {
        let archive = testutil::zip(&[("dist/linux/app", 0o750, b"nested")]);

        let entry = extract_zip_entry(archive.as_slice(), "dist/linux/app").unwrap();
        assert_eq!(entry.content, b"nested");
        assert_eq!(entry.mode, Some(0o750));
    }

    #[test]
    fn test_non_executable_mode_is_dropped() {
        let archive = testutil::zip(&[("data.txt", 0o644, b"data")]);

        let entry = extract_zip_entry(archive.as_slice(), "data.txt").unwrap();
        assert_eq!(entry.mode, None);
    }

    #[test]
    fn test_first_match_wins() {
        let options = ::zip::write::FileOptions::default()
            .compression_method(::zip::CompressionMethod::Stored)
            .unix_permissions(0o755);
        let mut writer = ::zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in [("app1", b"first"), ("app2", b"later")] {
            writer.start_file(name, options).unwrap();
            writer.write_all(content).unwrap();
        }
        let mut archive = writer.finish().unwrap().into_inner();

        // Rename "app2" to "app1" in both the local header and the central
        // directory. Names are not covered by the CRC.
        let mut i = 0;
        while i + 4 <= archive.len() {
            if &archive[i..i + 4] == b"app2" {
                archive[i + 3] = b'1';
            }
            i += 1;
        }

        let entry = extract_zip_entry(archive.as_slice(), "app1").unwrap();
        assert_eq!(entry.content, b"first");
    }

    #[test]
    fn test_name_match_is_exact() {
        let archive = testutil::zip(&[("bin/Tool.exe", 0o755, b"content")]);

        for wanted in ["bin/tool.exe", "Tool.exe", "./bin/Tool.exe"] {
            let err = extract_zip_entry(archive.as_slice(), wanted).unwrap_err();
            assert!(err.is_not_found(), "{wanted}");
        }
    }

    #[test]
    fn test_directory_entry_is_not_a_match() {
        let mut writer = ::zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .add_directory("bin/", ::zip::write::FileOptions::default())
            .unwrap();
        let archive = writer.finish().unwrap().into_inner();

        let err = extract_zip_entry(archive.as_slice(), "bin/").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_entry() {
        let archive = testutil::zip(&[("tool.exe", 0o755, b"content")]);

        let err = extract_zip_entry(archive.as_slice(), "other.exe").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "unable to find 'other.exe' in zip archive");
    }

    #[test]
    fn test_corrupt_archive_is_format_error() {
        let err = extract_zip_entry(&b"PK definitely not a zip"[..], "tool.exe").unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("'tool.exe'"));

        let archive = testutil::zip(&[("tool.exe", 0o755, b"content")]);
        let truncated = &archive[..archive.len() - 10];
        let err = extract_zip_entry(truncated, "tool.exe").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_executable_mode() {
        assert_eq!(executable_mode(Some(0o100755)), Some(0o755));
        assert_eq!(executable_mode(Some(0o100664)), None);
        assert_eq!(executable_mode(Some(0o100700)), Some(0o700));
        assert_eq!(executable_mode(Some(0o106755)), Some(0o755));
        assert_eq!(executable_mode(None), None);
    }
}
