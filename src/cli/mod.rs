//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::vault::{VaultService, VaultStore};

/// EvmVault CLI: password-protected vault for EVM key pairs.
#[derive(Parser)]
#[command(
    name = "evmvault",
    about = "Password-protected vault for EVM key pairs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault password (omit for interactive prompt)
    #[arg(
        short,
        long,
        env = "EVMVAULT_PASSWORD",
        hide_env_values = true,
        global = true
    )]
    pub password: Option<String>,

    /// Vault file (default: wallets.dat, or `vault_file` in .evmvault.toml)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new wallet with an optional name
    Create {
        /// Display name for the wallet
        name: Option<String>,
    },

    /// Show all wallets
    #[command(alias = "readAll")]
    List,

    /// Show wallets matching a name or address
    Read {
        /// Wallet name or address (case-insensitive)
        query: String,
    },

    /// Delete wallets matching a name or address
    Delete {
        /// Wallet name or address (case-insensitive)
        query: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// View the audit log of vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Everything a vault command needs: settings, resolved path and service.
pub struct Context {
    pub settings: Settings,
    pub vault_path: PathBuf,
    pub service: VaultService,
}

impl Context {
    /// Resolve settings from the working directory and open the vault handle.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;

        let vault_path = match &cli.file {
            Some(file) => cwd.join(file),
            None => settings.vault_path(&cwd),
        };

        let store = VaultStore::with_params(&vault_path, settings.argon2_params());

        Ok(Self {
            settings,
            vault_path,
            service: VaultService::new(store),
        })
    }

    /// Record an operation in the audit log (if enabled).
    pub fn audit(&self, operation: &str, address: Option<&str>, details: Option<&str>) {
        crate::audit::log_audit(
            &self.vault_path,
            self.settings.audit_log,
            operation,
            address,
            details,
        );
    }
}

/// Get the vault password, trying in order:
/// 1. `-p/--password` or the `EVMVAULT_PASSWORD` env var
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn password(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(pw) = cli.password.as_deref() {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw.to_string()));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault password")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
