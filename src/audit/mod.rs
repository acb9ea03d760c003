//! Audit log: SQLite-based operation history.
//!
//! Stores a record of every vault operation (create, read, list, delete)
//! in `.evmvault-audit.db` next to the vault file.  Only addresses and
//! counts are recorded, never secrets.
//!
//! Designed for graceful degradation: if the database can't be opened or
//! written to, operations silently continue without logging.

use std::path::{Path, PathBuf};

use crate::vault::format::parent_dir;

/// File name of the audit database, placed in the vault's directory.
pub const DB_FILE_NAME: &str = ".evmvault-audit.db";

/// Return the audit database path for a given vault file.
pub fn db_path(vault_path: &Path) -> PathBuf {
    parent_dir(vault_path).join(DB_FILE_NAME)
}

#[cfg(feature = "audit-log")]
pub use sqlite::{AuditEntry, AuditLog};

#[cfg(feature = "audit-log")]
mod sqlite {
    use std::path::Path;

    use chrono::{DateTime, Utc};
    use rusqlite::Connection;
    use tracing::debug;

    use crate::errors::{Result, VaultError};

    /// A single audit log entry.
    #[derive(Debug, Clone)]
    pub struct AuditEntry {
        pub id: i64,
        pub timestamp: DateTime<Utc>,
        pub operation: String,
        pub vault: String,
        pub address: Option<String>,
        pub details: Option<String>,
    }

    /// SQLite-backed audit log.
    pub struct AuditLog {
        conn: Connection,
    }

    impl AuditLog {
        /// Open (or create) the audit database at `db_path`.
        ///
        /// Returns `None` if the database can't be opened; callers should
        /// treat this as "audit logging unavailable" and continue normally.
        pub fn open(db_path: &Path) -> Option<Self> {
            let conn = match Connection::open(db_path) {
                Ok(conn) => conn,
                Err(e) => {
                    debug!("Audit log unavailable at {:?}: {e}", db_path);
                    return None;
                }
            };

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let perms = std::fs::Permissions::from_mode(0o600);
                let _ = std::fs::set_permissions(db_path, perms);
            }

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS audit_log (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    timestamp   TEXT NOT NULL,
                    operation   TEXT NOT NULL,
                    vault       TEXT NOT NULL,
                    address     TEXT,
                    details     TEXT
                );",
            )
            .ok()?;

            Some(Self { conn })
        }

        /// Record an operation. Fire-and-forget, errors are silently ignored.
        pub fn log(
            &self,
            operation: &str,
            vault: &str,
            address: Option<&str>,
            details: Option<&str>,
        ) {
            let now = Utc::now().to_rfc3339();
            let _ = self.conn.execute(
                "INSERT INTO audit_log (timestamp, operation, vault, address, details)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![now, operation, vault, address, details],
            );
        }

        /// Return the newest `limit` entries, most recent first.
        pub fn recent(&self, limit: usize) -> Result<Vec<AuditEntry>> {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);

            let mut stmt = self
                .conn
                .prepare(
                    "SELECT id, timestamp, operation, vault, address, details
                     FROM audit_log
                     ORDER BY id DESC
                     LIMIT ?1",
                )
                .map_err(|e| VaultError::AuditError(format!("query prepare: {e}")))?;

            let rows = stmt
                .query_map([limit], |row| {
                    let ts: String = row.get(1)?;
                    let timestamp = DateTime::parse_from_rfc3339(&ts)
                        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

                    Ok(AuditEntry {
                        id: row.get(0)?,
                        timestamp,
                        operation: row.get(2)?,
                        vault: row.get(3)?,
                        address: row.get(4)?,
                        details: row.get(5)?,
                    })
                })
                .map_err(|e| VaultError::AuditError(format!("query exec: {e}")))?;

            let mut entries = Vec::new();
            for row in rows {
                entries.push(row.map_err(|e| VaultError::AuditError(format!("row parse: {e}")))?);
            }

            Ok(entries)
        }
    }
}

/// Log an audit event for the vault at `vault_path`.
///
/// Never fails the parent operation; a no-op when `enabled` is false or
/// the crate was built without the `audit-log` feature.
pub fn log_audit(
    vault_path: &Path,
    enabled: bool,
    operation: &str,
    address: Option<&str>,
    details: Option<&str>,
) {
    #[cfg(feature = "audit-log")]
    if enabled {
        if let Some(audit) = AuditLog::open(&db_path(vault_path)) {
            let vault = vault_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy();
            audit.log(operation, &vault, address, details);
        }
    }

    #[cfg(not(feature = "audit-log"))]
    let _ = (vault_path, enabled, operation, address, details);
}
