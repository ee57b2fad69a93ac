//! HTTP server command
//!
//! Runs the appointment API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hospital_server::db::{create_pool, migrations};
use hospital_server::{run_server, AppState, AppointmentRepo};

use super::DatabaseArgs;
use crate::config::FileConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "HOSPITAL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip creating the appointments table on startup
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = FileConfig::load(args.db.config.as_deref())?;
    let db_config = file.resolve_database(args.db.database_url, args.db.max_connections)?;
    let server_config = file.resolve_server(args.bind, args.cors_permissive);

    tracing::info!(
        bind = %server_config.bind_addr,
        max_connections = db_config.max_connections,
        "Starting hospital server"
    );

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    if args.no_migrate {
        tracing::info!("Skipping migrations (--no-migrate)");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(Arc::new(AppointmentRepo::new(pool)));

    // Blocks until shutdown
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
