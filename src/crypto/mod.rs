//! Cryptographic primitives for EvmVault.
//!
//! This module provides:
//! - Argon2id password-based key derivation (`kdf`)
//! - The self-describing AES-256-GCM vault blob (`cipher`)
//! - secp256k1 key pairs and EVM address derivation (`keypair`)

pub mod cipher;
pub mod kdf;
pub mod keypair;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_keypair, ...};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt, Argon2Params};
pub use keypair::{address_from_secret, generate as generate_keypair, to_checksum_address, KeyPair};
