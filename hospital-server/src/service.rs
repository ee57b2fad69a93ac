//! Appointment service interface
//!
//! The HTTP layer talks to persistence only through this trait.
//! [`crate::db::AppointmentRepo`] is the Postgres implementation.

use async_trait::async_trait;

use crate::db::DbError;
use crate::models::{Appointment, NewAppointment};

/// CRUD operations on appointments, one SQL statement each.
///
/// Absence is not an error: lookups return `None` and mutations return
/// `false` when no row has the requested id. `DbError` is reserved for
/// connectivity and SQL failures.
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// All appointments, in whatever order the database returns them.
    async fn list_all(&self) -> Result<Vec<Appointment>, DbError>;

    /// Appointment with the given id, if any.
    async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbError>;

    /// Insert and return the generated id.
    async fn create(&self, appointment: &NewAppointment) -> Result<i32, DbError>;

    /// Overwrite every mutable field of the row with `appointment.id`.
    ///
    /// Returns whether a row matched, not whether anything changed.
    async fn update(&self, appointment: &Appointment) -> Result<bool, DbError>;

    /// Returns whether a row was deleted.
    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError>;
}
