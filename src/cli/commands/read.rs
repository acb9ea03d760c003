//! `evmvault read`: show the wallets matching a name or address.

use crate::cli::output;
use crate::cli::{password, Cli, Context};
use crate::errors::Result;

/// Execute the `read` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let ctx = Context::load(cli)?;
    let password = password(cli)?;

    let matches = ctx.service.find(password.as_bytes(), query)?;

    for (i, entry) in matches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        ctx.audit("read", Some(&entry.address), None);
        output::print_entry(entry);
    }

    Ok(())
}
