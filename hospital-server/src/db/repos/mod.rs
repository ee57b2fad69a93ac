//! Repository implementations for database access

pub mod appointments;

pub use appointments::AppointmentRepo;

/// Database error type
///
/// Only connectivity and SQL failures end up here; a missing row is a
/// normal outcome reported through the return value.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
