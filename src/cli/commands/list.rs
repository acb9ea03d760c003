//! `evmvault list`: display every wallet in the vault.

use crate::cli::output;
use crate::cli::{password, Cli, Context};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli)?;
    let password = password(cli)?;

    let entries = ctx.service.list(password.as_bytes())?;

    ctx.audit("list", None, Some(&format!("{} wallet(s)", entries.len())));

    if !entries.is_empty() {
        output::info(&format!("Total wallets: {}", entries.len()));
    }
    output::print_entries_table(&entries);

    Ok(())
}
