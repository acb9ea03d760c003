//! secp256k1 key pair generation and EVM address derivation.
//!
//! An address is the low 20 bytes of Keccak-256 over the uncompressed
//! public point (without its `0x04` tag byte), rendered as `0x` + EIP-55
//! mixed-case hex.  Secrets are stored as 64 lowercase hex characters
//! without a prefix.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha3::{Digest, Keccak256};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Result, VaultError};

/// Prefix carried by every rendered address.
pub const ADDRESS_PREFIX: &str = "0x";

/// Number of hash bytes kept for an address.
const ADDRESS_LEN: usize = 20;

/// Length of an uncompressed SEC1 point: tag byte + two 32-byte coordinates.
const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Candidate scalars outside `[1, n)` are redrawn; hitting this bound means
/// the entropy source is broken, not unlucky.
const MAX_SCALAR_ATTEMPTS: usize = 16;

/// A freshly generated identity.
pub struct KeyPair {
    /// Checksummed `0x…` address.
    pub address: String,
    /// Hex-encoded private scalar, no prefix.
    pub secret: Zeroizing<String>,
}

/// Generate a new random key pair.
pub fn generate() -> Result<KeyPair> {
    let secret_key = random_secret_key()?;
    let address = derive_address(&secret_key.public_key())?;
    let secret = Zeroizing::new(hex::encode(secret_key.to_bytes()));

    Ok(KeyPair { address, secret })
}

/// Re-derive the address that belongs to a stored hex secret.
///
/// Accepts the secret with or without a `0x` prefix.
pub fn address_from_secret(secret_hex: &str) -> Result<String> {
    let trimmed = secret_hex
        .strip_prefix(ADDRESS_PREFIX)
        .unwrap_or(secret_hex);

    let bytes = Zeroizing::new(
        hex::decode(trimmed)
            .map_err(|e| VaultError::GenerationFailed(format!("secret is not valid hex: {e}")))?,
    );
    if bytes.len() != 32 {
        return Err(VaultError::GenerationFailed(format!(
            "secret must be 32 bytes, got {}",
            bytes.len()
        )));
    }

    let secret_key = SecretKey::from_slice(&bytes)
        .map_err(|_| VaultError::GenerationFailed("secret is not a valid secp256k1 scalar".into()))?;

    derive_address(&secret_key.public_key())
}

/// Render 20 address bytes as an EIP-55 checksummed string.
pub fn to_checksum_address(address: &[u8; ADDRESS_LEN]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(ADDRESS_PREFIX.len() + lower.len());
    out.push_str(ADDRESS_PREFIX);

    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn random_secret_key() -> Result<SecretKey> {
    let mut candidate = [0u8; 32];

    for _ in 0..MAX_SCALAR_ATTEMPTS {
        OsRng.try_fill_bytes(&mut candidate).map_err(|e| {
            VaultError::GenerationFailed(format!("entropy source unavailable: {e}"))
        })?;

        // Rejects zero and anything >= the group order.
        let parsed = SecretKey::from_slice(&candidate);
        candidate.zeroize();

        if let Ok(secret_key) = parsed {
            return Ok(secret_key);
        }
    }

    Err(VaultError::GenerationFailed(format!(
        "no valid scalar after {MAX_SCALAR_ATTEMPTS} attempts"
    )))
}

fn derive_address(public_key: &PublicKey) -> Result<String> {
    let point = public_key.to_encoded_point(false);
    let encoded = point.as_bytes();

    if encoded.len() != UNCOMPRESSED_POINT_LEN || encoded[0] != 0x04 {
        return Err(VaultError::GenerationFailed(
            "public key did not encode as an uncompressed point".into(),
        ));
    }

    let hash = Keccak256::digest(&encoded[1..]);
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&hash[hash.len() - ADDRESS_LEN..]);

    Ok(to_checksum_address(&address))
}
