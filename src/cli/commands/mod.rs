//! One module per `evmvault` subcommand.

#[cfg(feature = "audit-log")]
pub mod audit_cmd;
pub mod completions;
pub mod create;
pub mod delete;
pub mod list;
pub mod read;
