//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool, one connection per repository call
//! - One parameterized statement per operation, no transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
