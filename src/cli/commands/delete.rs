//! `evmvault delete`: remove every wallet matching a name or address.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{password, Cli, Context};
use crate::errors::{Result, VaultError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, query: &str, force: bool) -> Result<()> {
    let ctx = Context::load(cli)?;
    let password = password(cli)?;

    // Unless --force is set, show what would go and ask first.
    if !force {
        let matches = ctx.service.find(password.as_bytes(), query)?;
        if matches.len() > 1 {
            output::warning(&format!(
                "'{query}' matches {} wallets, all of them will be deleted",
                matches.len()
            ));
        }
        for entry in &matches {
            output::tip(&entry.address);
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} wallet(s)?", matches.len()))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.service.delete(password.as_bytes(), query)?;

    ctx.audit("delete", None, Some(&format!("removed {removed} matching '{query}'")));
    output::success(&format!("Deleted {removed} wallet(s)"));

    Ok(())
}
