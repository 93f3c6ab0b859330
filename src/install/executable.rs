use crate::archive::ExtractedEntry;
use crate::error::{Error, Result};
use crate::utils::base_name;
use log::info;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Mode applied when the archive does not record a usable one
pub const DEFAULT_MODE: u32 = 0o755;

/// Create the destination directory tree when requested
///
/// Without `mkdirs` nothing is checked here; a missing directory surfaces
/// when the output file is created.
pub fn ensure_destination(dest_dir: &Path, mkdirs: bool) -> Result<()> {
    if !mkdirs {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(dest_dir)
        .map_err(|e| Error::io("unable to create destination directory", dest_dir, e))?;
    info!("Created directory {}", dest_dir.display());
    Ok(())
}

/// Write an extracted entry into `dest_dir` under its base name
///
/// An existing file is overwritten. A failure part way through the copy
/// leaves the partial file behind.
pub fn install_executable(
    entry_path: &str,
    entry: &ExtractedEntry,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let name = base_name(entry_path).ok_or_else(|| {
        Error::io(
            "entry path has no file name",
            entry_path,
            io::Error::new(io::ErrorKind::InvalidInput, "empty base name"),
        )
    })?;
    let out_path = dest_dir.join(name);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEFAULT_MODE);
    }

    let mut file = options
        .open(&out_path)
        .map_err(|e| Error::io("unable to create destination file", &out_path, e))?;

    file.write_all(&entry.content)
        .map_err(|e| Error::io("unable to copy extracted file content", &out_path, e))?;

    set_mode(&file, entry.mode.unwrap_or(DEFAULT_MODE))
        .map_err(|e| Error::io("unable to set file permissions", &out_path, e))?;

    Ok(out_path)
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(content: &[u8], mode: Option<u32>) -> ExtractedEntry {
        ExtractedEntry {
            content: content.to_vec(),
            mode,
        }
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o7777
    }

    #[test]
    fn test_writes_under_base_name() {
        let temp_dir = TempDir::new().unwrap();

        let out = install_executable("dist/bin/app", &entry(b"ok", Some(0o755)), temp_dir.path())
            .unwrap();

        assert_eq!(out, temp_dir.path().join("app"));
        assert_eq!(fs::read(&out).unwrap(), b"ok");
    }

    #[cfg(unix)]
    #[test]
    fn test_applies_recorded_mode() {
        let temp_dir = TempDir::new().unwrap();

        let out = install_executable("app", &entry(b"ok", Some(0o750)), temp_dir.path()).unwrap();
        assert_eq!(mode_of(&out), 0o750);
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_back_to_default_mode() {
        let temp_dir = TempDir::new().unwrap();

        let out = install_executable("tool", &entry(b"ok", None), temp_dir.path()).unwrap();
        assert_eq!(mode_of(&out), DEFAULT_MODE);
    }

    #[cfg(unix)]
    #[test]
    fn test_setuid_tar_entry_installs_without_special_bits() {
        use crate::archive::{self, ArchiveKind, testutil};

        let temp_dir = TempDir::new().unwrap();
        let archive = testutil::tar_gz(&[("app", 0o6755, b"ok")]);

        let entry = archive::extract(ArchiveKind::TarGzip, archive.as_slice(), "app").unwrap();
        let out = install_executable("app", &entry, temp_dir.path()).unwrap();
        assert_eq!(mode_of(&out), 0o755);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("app");
        fs::write(&existing, b"a much longer previous version").unwrap();

        install_executable("app", &entry(b"new", None), temp_dir.path()).unwrap();
        assert_eq!(fs::read(&existing).unwrap(), b"new");
    }

    #[test]
    fn test_missing_destination_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does/not/exist");

        let err = install_executable("app", &entry(b"ok", None), &missing).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_rejects_entry_without_file_name() {
        let temp_dir = TempDir::new().unwrap();

        let err = install_executable("", &entry(b"ok", None), temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_ensure_destination_creates_tree() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("opt/tools/bin");

        ensure_destination(&nested, true).unwrap();
        assert!(nested.is_dir());

        // Existing directories are fine
        ensure_destination(&nested, true).unwrap();
    }

    #[test]
    fn test_ensure_destination_without_mkdirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("bin");

        ensure_destination(&nested, false).unwrap();
        assert!(!nested.exists());
    }
}
