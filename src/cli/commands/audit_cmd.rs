//! `evmvault audit`: display the audit log.
//!
//! Usage:
//!   evmvault audit               # show last 50 entries
//!   evmvault audit --last 20     # show last 20

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::audit::{db_path, AuditEntry, AuditLog};
use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::{Result, VaultError};

/// Execute the `audit` command.
pub fn execute(cli: &Cli, last: usize) -> Result<()> {
    let ctx = Context::load(cli)?;
    let path = db_path(&ctx.vault_path);

    if !path.exists() {
        output::info("No audit entries found.");
        return Ok(());
    }

    let audit = AuditLog::open(&path)
        .ok_or_else(|| VaultError::AuditError("failed to open audit database".into()))?;

    let entries = audit.recent(last)?;
    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Print audit entries in a formatted table.
fn print_audit_table(entries: &[AuditEntry]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Vault", "Address", "Details"]);

    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            colorize_operation(&entry.operation),
            entry.vault.clone(),
            entry.address.clone().unwrap_or_else(|| "-".into()),
            entry.details.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

fn colorize_operation(op: &str) -> String {
    match op {
        "create" => style(op).green().to_string(),
        "delete" => style(op).red().to_string(),
        "read" | "list" => style(op).blue().to_string(),
        _ => op.to_string(),
    }
}
