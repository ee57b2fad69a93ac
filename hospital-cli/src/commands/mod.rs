//! Command implementations for the hospital CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use std::path::PathBuf;

use clap::Args;

/// Database connection flags shared by every command that talks to Postgres
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections (default: 5)
    #[arg(long, env = "HOSPITAL_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Path to config file (default: ./hospital.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}
