//! The four vault operations the CLI calls.
//!
//! Each operation is one transaction over the whole vault:
//! load -> (generate) -> mutate in memory -> (save).  Mutating operations
//! hold the writer lock from before the load until after the save, so two
//! concurrent commands cannot lose each other's updates.

use tracing::{debug, info};

use crate::crypto::keypair;
use crate::errors::{Result, VaultError};

use super::entry::Entry;
use super::store::VaultStore;

/// Orchestrates create/list/find/delete against one `VaultStore`.
#[derive(Debug, Clone)]
pub struct VaultService {
    store: VaultStore,
}

impl VaultService {
    pub fn new(store: VaultStore) -> Self {
        Self { store }
    }

    /// Generate a new key pair, append it to the vault and return it.
    ///
    /// An empty `name` stores an unnamed entry.
    pub fn create(&self, password: &[u8], name: Option<&str>) -> Result<Entry> {
        let _lock = self.store.lock()?;

        let mut entries = self.store.load(password)?;
        let pair = keypair::generate()?;
        let entry = Entry::from_keypair(&pair, name);

        entries.push(entry.clone());
        self.store.save(&entries, password)?;

        info!("Created wallet {} ({} total)", entry.address, entries.len());
        Ok(entry)
    }

    /// Return every entry in insertion order.
    pub fn list(&self, password: &[u8]) -> Result<Vec<Entry>> {
        self.store.load(password)
    }

    /// Return every entry whose name or address matches `query`.
    ///
    /// Names are not unique, so several entries may match.
    pub fn find(&self, password: &[u8], query: &str) -> Result<Vec<Entry>> {
        let matches: Vec<Entry> = self
            .store
            .load(password)?
            .into_iter()
            .filter(|e| e.matches(query))
            .collect();

        if matches.is_empty() {
            return Err(VaultError::NotFound(query.to_string()));
        }

        debug!("Query matched {} entries", matches.len());
        Ok(matches)
    }

    /// Remove every entry whose name or address matches `query`.
    ///
    /// Returns the number removed.  When nothing matches the vault file is
    /// not rewritten and `NotFound` is returned.
    pub fn delete(&self, password: &[u8], query: &str) -> Result<usize> {
        // Nothing to delete from, and no reason to create a lock file.
        if !self.store.exists()? {
            return Err(VaultError::NotFound(query.to_string()));
        }

        let _lock = self.store.lock()?;

        let mut entries = self.store.load(password)?;
        let before = entries.len();
        entries.retain(|e| !e.matches(query));
        let removed = before - entries.len();

        if removed == 0 {
            return Err(VaultError::NotFound(query.to_string()));
        }

        self.store.save(&entries, password)?;

        info!("Deleted {removed} wallet(s) ({} remaining)", entries.len());
        Ok(removed)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &VaultStore {
        &self.store
    }
}
