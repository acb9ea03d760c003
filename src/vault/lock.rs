//! Exclusive advisory lock serializing writers of one vault file.
//!
//! The lock is taken on a sidecar file (`.wallets.dat.lock`) rather than on
//! the vault itself: saving renames a new file over the vault, and a lock
//! held on the replaced inode would no longer exclude anyone.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::debug;

use super::format::{parent_dir, sidecar_path};
use crate::errors::Result;

/// Holds the lock until dropped.
#[derive(Debug)]
pub struct VaultLock {
    file: File,
    path: PathBuf,
}

impl VaultLock {
    /// Block until this process holds the exclusive lock for `vault_path`.
    pub fn exclusive(vault_path: &Path) -> Result<Self> {
        let parent = parent_dir(vault_path);
        if !parent.exists() {
            fs::create_dir_all(&parent)?;
        }

        let path = sidecar_path(vault_path, "lock");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        FileExt::lock_exclusive(&file)?;
        debug!("Acquired vault lock {:?}", path);

        Ok(Self { file, path })
    }

    /// Path of the sidecar lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for VaultLock {
    fn drop(&mut self) {
        // Closing the descriptor releases the lock too; unlock explicitly so
        // the release does not depend on drop order of `file`.
        let _ = FileExt::unlock(&self.file);
        debug!("Released vault lock {:?}", self.path);
    }
}
