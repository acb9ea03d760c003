//! Password-based AES-256-GCM encryption of the vault payload.
//!
//! The blob is self-describing: everything needed to decrypt it, except
//! the password, travels in a fixed 61-byte header.
//!
//! ```text
//! [EVMV: 4][version: 1][m_cost: 4 LE][t_cost: 4 LE][p_cost: 4 LE][salt: 32][nonce: 12][ciphertext + tag: 16]
//! ```
//!
//! The header is passed to AES-GCM as associated data, so a change to any
//! byte of the blob (header included) fails the tag check.  Every failure
//! to authenticate a blob is reported as `VaultError::AuthenticationFailed`.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use super::kdf::{derive_key, generate_salt, Argon2Params, SALT_LEN};
use crate::errors::{Result, VaultError};

/// Magic bytes at the start of every vault blob.
const MAGIC: &[u8; 4] = b"EVMV";

/// Current blob format version.
pub const CURRENT_VERSION: u8 = 1;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// 4 (magic) + 1 (version) + 12 (Argon2 params) + salt + nonce.
pub const HEADER_LEN: usize = 4 + 1 + 12 + SALT_LEN + NONCE_LEN;

/// Encrypt `plaintext` under a key derived from `password`.
///
/// A fresh salt and nonce are drawn for every call, so encrypting the same
/// payload twice never yields the same blob.
pub fn encrypt(plaintext: &[u8], password: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    let salt = generate_salt()?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| VaultError::EncryptionFailed(format!("entropy source unavailable: {e}")))?;

    let key = Zeroizing::new(derive_key(password, &salt, params)?);
    let header = encode_header(params, &salt, &nonce);

    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(&header);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a blob produced by `encrypt`.
///
/// Plaintext is only returned once the tag has been verified.
pub fn decrypt(blob: &[u8], password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if blob.len() < HEADER_LEN + TAG_LEN {
        return Err(VaultError::AuthenticationFailed);
    }

    let (header, ciphertext) = blob.split_at(HEADER_LEN);
    let parsed = parse_header(header)?;

    // Parameters come from an unauthenticated header at this point; refuse
    // anything a legitimate writer could not have produced.
    parsed
        .params
        .validate()
        .map_err(|_| VaultError::AuthenticationFailed)?;

    let key = Zeroizing::new(derive_key(password, parsed.salt, &parsed.params)?);
    let cipher =
        Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| VaultError::AuthenticationFailed)?;

    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(parsed.nonce),
            Payload {
                msg: ciphertext,
                aad: header,
            },
        )
        .map_err(|_| VaultError::AuthenticationFailed)?;

    Ok(Zeroizing::new(plaintext))
}

struct Header<'a> {
    params: Argon2Params,
    salt: &'a [u8],
    nonce: &'a [u8],
}

fn encode_header(params: &Argon2Params, salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN]) -> Vec<u8> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    header.extend_from_slice(MAGIC);
    header.push(CURRENT_VERSION);
    header.extend_from_slice(&params.memory_kib.to_le_bytes());
    header.extend_from_slice(&params.iterations.to_le_bytes());
    header.extend_from_slice(&params.parallelism.to_le_bytes());
    header.extend_from_slice(salt);
    header.extend_from_slice(nonce);
    header
}

fn parse_header(header: &[u8]) -> Result<Header<'_>> {
    if &header[0..4] != MAGIC || header[4] != CURRENT_VERSION {
        return Err(VaultError::AuthenticationFailed);
    }

    let read_u32 = |offset: usize| -> Result<u32> {
        header[offset..offset + 4]
            .try_into()
            .map(u32::from_le_bytes)
            .map_err(|_| VaultError::AuthenticationFailed)
    };

    let params = Argon2Params {
        memory_kib: read_u32(5)?,
        iterations: read_u32(9)?,
        parallelism: read_u32(13)?,
    };

    let salt_start = 17;
    let nonce_start = salt_start + SALT_LEN;

    Ok(Header {
        params,
        salt: &header[salt_start..nonce_start],
        nonce: &header[nonce_start..nonce_start + NONCE_LEN],
    })
}
