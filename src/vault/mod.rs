//! Vault module: encrypted key pair storage.
//!
//! This module provides:
//! - The `Entry` type and query matching (`entry`)
//! - The plaintext document codec and atomic file writes (`format`)
//! - The writer lock (`lock`)
//! - Whole-file load/save through the cipher (`store`)
//! - The create/list/find/delete operations (`service`)

pub mod entry;
pub mod format;
pub mod lock;
pub mod service;
pub mod store;

// Re-export the most commonly used items.
pub use entry::Entry;
pub use lock::VaultLock;
pub use service::VaultService;
pub use store::{VaultStore, DEFAULT_VAULT_FILE};
