//! Appointment repository
//!
//! Postgres implementation of [`AppointmentService`]:
//! - every call acquires its own pooled connection, dropped on return
//! - one parameterized statement per call
//! - "not found" is `None` / `false`, never an error

use async_trait::async_trait;
use sqlx::PgPool;

use super::DbError;
use crate::models::{Appointment, NewAppointment};
use crate::service::AppointmentService;

/// Appointment repository
#[derive(Debug, Clone)]
pub struct AppointmentRepo {
    pool: PgPool,
}

impl AppointmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentService for AppointmentRepo {
    /// No ORDER BY; row order is whatever Postgres returns.
    async fn list_all(&self) -> Result<Vec<Appointment>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let rows: Vec<Appointment> = sqlx::query_as(
            r#"
            SELECT id, patient_name, doctor_name, appointment_date, status
            FROM appointments
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(count = rows.len(), "listed appointments");
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let row: Option<Appointment> = sqlx::query_as(
            r#"
            SELECT id, patient_name, doctor_name, appointment_date, status
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        tracing::debug!(id, found = row.is_some(), "fetched appointment");
        Ok(row)
    }

    async fn create(&self, appointment: &NewAppointment) -> Result<i32, DbError> {
        let mut conn = self.pool.acquire().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO appointments (patient_name, doctor_name, appointment_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&appointment.patient_name)
        .bind(&appointment.doctor_name)
        .bind(appointment.appointment_date)
        .bind(&appointment.status)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(id, "created appointment");
        Ok(id)
    }

    async fn update(&self, appointment: &Appointment) -> Result<bool, DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET patient_name = $2,
                doctor_name = $3,
                appointment_date = $4,
                status = $5
            WHERE id = $1
            "#,
        )
        .bind(appointment.id)
        .bind(&appointment.patient_name)
        .bind(&appointment.doctor_name)
        .bind(appointment.appointment_date)
        .bind(&appointment.status)
        .execute(&mut *conn)
        .await?;

        let matched = result.rows_affected() > 0;
        tracing::debug!(id = appointment.id, matched, "updated appointment");
        Ok(matched)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id, deleted, "deleted appointment");
        Ok(deleted)
    }
}
