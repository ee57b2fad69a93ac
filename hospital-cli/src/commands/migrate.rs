//! Schema command
//!
//! Creates the appointments table without starting the server.

use anyhow::{Context, Result};
use clap::Parser;

use hospital_server::db::{create_pool, migrations};

use super::DatabaseArgs;
use crate::config::FileConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the appointments table if it doesn't exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let file = FileConfig::load(args.db.config.as_deref())?;
    let db_config = file.resolve_database(args.db.database_url, args.db.max_connections)?;

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    println!("✅ appointments table is ready");
    Ok(())
}
