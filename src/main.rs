use clap::Parser;
use evmvault::cli::commands;
use evmvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays clean for key material.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { ref name } => commands::create::execute(&cli, name.as_deref()),
        Commands::List => commands::list::execute(&cli),
        Commands::Read { ref query } => commands::read::execute(&cli, query),
        Commands::Delete { ref query, force } => commands::delete::execute(&cli, query, force),
        #[cfg(feature = "audit-log")]
        Commands::Audit { last } => commands::audit_cmd::execute(&cli, last),
        #[cfg(not(feature = "audit-log"))]
        Commands::Audit { .. } => Err(evmvault::errors::VaultError::AuditError(
            "this build does not include the audit-log feature".into(),
        )),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        evmvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
