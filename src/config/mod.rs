//! Project configuration (`.evmvault.toml`).

pub mod settings;

pub use settings::Settings;
