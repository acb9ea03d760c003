//! The plaintext vault document and the on-disk file primitives.
//!
//! Inside the encrypted blob the vault is a JSON array of entries:
//!
//! ```text
//! [{"name":"alice","address":"0x…","secret":"…"},{"address":"0x…","secret":"…"}]
//! ```
//!
//! The file itself is written with temp-file + rename so a crash mid-write
//! never replaces a good vault with a partial one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use super::entry::Entry;
use crate::errors::{Result, VaultError};

/// Serialize entries into the plaintext document.
pub fn encode_entries(entries: &[Entry]) -> Result<Zeroizing<Vec<u8>>> {
    serde_json::to_vec(entries)
        .map(Zeroizing::new)
        .map_err(|e| VaultError::SerializationError(format!("entries: {e}")))
}

/// Parse the plaintext document back into entries.
pub fn decode_entries(plaintext: &[u8]) -> Result<Vec<Entry>> {
    // `null` is an empty vault.
    let entries: Option<Vec<Entry>> = serde_json::from_slice(plaintext)
        .map_err(|e| VaultError::InvalidVaultFormat(format!("entries JSON: {e}")))?;
    Ok(entries.unwrap_or_default())
}

/// Read the raw vault file, or `None` if it does not exist yet.
pub fn read_blob(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `data` to `path` **atomically**.
///
/// 1. Write to a temp file in the same directory and flush it to disk.
/// 2. Rename the temp file over the target path.
/// 3. Flush the directory so the rename itself is durable.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = parent_dir(path);
    if !parent.exists() {
        fs::create_dir_all(&parent)?;
    }

    let tmp_path = sidecar_path(path, "tmp");
    let written = write_private(&tmp_path, data).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    #[cfg(unix)]
    fs::File::open(&parent)?.sync_all()?;

    Ok(())
}

/// Hidden file next to the vault: `wallets.dat` -> `.wallets.dat.<suffix>`.
pub fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    parent_dir(path).join(format!(
        ".{}.{suffix}",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

/// Directory containing `path`, with `.` standing in for a bare file name.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // Owner-only from the moment the file exists.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; a temp file left by a crashed save
    // keeps whatever mode it had.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(data)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn decode_rejects_non_json() {
        assert!(matches!(
            decode_entries(b"definitely not json"),
            Err(VaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(matches!(
            decode_entries(br#"{"address":"0x01"}"#),
            Err(VaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn decode_accepts_null_as_empty() {
        assert!(decode_entries(b"null").unwrap().is_empty());
    }

    #[test]
    fn read_blob_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_blob(&dir.path().join("nope.dat")).unwrap().is_none());
    }

    #[test]
    fn write_atomic_replaces_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wallets.dat");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!sidecar_path(&path, "tmp").exists());
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("wallets.dat");
        write_atomic(&path, b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn sidecar_path_for_bare_file_name() {
        assert_eq!(
            sidecar_path(Path::new("wallets.dat"), "lock"),
            PathBuf::from("./.wallets.dat.lock")
        );
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wallets.dat");
        write_atomic(&path, b"data").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn stale_temp_file_does_not_leak_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wallets.dat");
        let tmp = sidecar_path(&path, "tmp");
        fs::write(&tmp, b"left over").unwrap();
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, b"data").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }
}
