use thiserror::Error;

/// All errors that can occur in EvmVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// The password is wrong or the vault blob was altered.  Produced only
    /// by the cipher layer and never rewritten by callers.
    #[error("Invalid password or corrupted vault file")]
    AuthenticationFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Key generation failed: {0}")]
    GenerationFailed(String),

    // --- Vault errors ---
    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("No wallet found matching '{0}'")]
    NotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Audit error: {0}")]
    AuditError(String),
}

/// Convenience type alias for EvmVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
