//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of wallets (#, Name, Address, Private Key).
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("No wallets found");
        tip("Run `evmvault create [NAME]` to add your first wallet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Address", "Private Key"]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.name.clone().unwrap_or_default(),
            e.address.clone(),
            e.secret.clone(),
        ]);
    }

    println!("{table}");
}

/// Print one wallet as labelled lines.
pub fn print_entry(entry: &Entry) {
    if let Some(name) = &entry.name {
        println!("{} {}", style("Name:").bold(), name);
    }
    println!("{} {}", style("Address:").bold(), entry.address);
    println!("{} {}", style("PrivateKey:").bold(), entry.secret);
}
