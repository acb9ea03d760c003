//! Whole-vault persistence.
//!
//! `VaultStore` is a handle on one vault file.  Every `load` reads and
//! decrypts the entire file; every `save` re-serializes, re-encrypts and
//! atomically replaces it.  There are no partial updates.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::crypto::cipher::{decrypt, encrypt};
use crate::crypto::kdf::Argon2Params;
use crate::errors::Result;

use super::entry::Entry;
use super::format;
use super::lock::VaultLock;

/// Default vault file name.
pub const DEFAULT_VAULT_FILE: &str = "wallets.dat";

/// A handle on one encrypted vault file.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Argon2 params used when sealing on `save`.
    params: Argon2Params,
}

impl VaultStore {
    /// Handle on `path` using the default Argon2 params.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_params(path, Argon2Params::default())
    }

    /// Handle on `path` sealing with explicit Argon2 params.
    pub fn with_params(path: impl Into<PathBuf>, params: Argon2Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Read and decrypt every entry.
    ///
    /// A missing file is an empty vault.  A wrong password or altered file
    /// is `AuthenticationFailed`; a blob that decrypts to something other
    /// than an entry list is `InvalidVaultFormat`.
    pub fn load(&self, password: &[u8]) -> Result<Vec<Entry>> {
        let Some(blob) = format::read_blob(&self.path)? else {
            debug!("No vault at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        };

        let plaintext = decrypt(&blob, password)?;
        let entries = format::decode_entries(&plaintext)?;

        debug!("Loaded {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    /// Encrypt `entries` and atomically replace the vault file.
    pub fn save(&self, entries: &[Entry], password: &[u8]) -> Result<()> {
        let plaintext = format::encode_entries(entries)?;
        let blob = encrypt(&plaintext, password, &self.params)?;

        format::write_atomic(&self.path, &blob)?;

        info!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// Take the exclusive writer lock for this vault.
    pub fn lock(&self) -> Result<VaultLock> {
        VaultLock::exclusive(&self.path)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the vault file exists on disk.
    ///
    /// Errors other than "not found" (a non-directory parent, missing
    /// permissions) are returned rather than read as absence.
    pub fn exists(&self) -> Result<bool> {
        Ok(self.path.try_exists()?)
    }

    /// Returns the Argon2 params used for sealing.
    pub fn params(&self) -> &Argon2Params {
        &self.params
    }
}
