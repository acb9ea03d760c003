//! `evmvault create`: generate a new wallet and store it in the vault.

use crate::cli::output;
use crate::cli::{password, Cli, Context};
use crate::errors::Result;

/// Execute the `create` command.
pub fn execute(cli: &Cli, name: Option<&str>) -> Result<()> {
    let ctx = Context::load(cli)?;
    let password = password(cli)?;

    let entry = ctx.service.create(password.as_bytes(), name)?;

    ctx.audit("create", Some(&entry.address), entry.name.as_deref());
    output::success("Wallet created successfully:");
    output::print_entry(&entry);

    Ok(())
}
