//! Schema setup for the appointments table

use sqlx::PgPool;

use super::DbError;

/// Create the appointments table if it doesn't exist.
///
/// Identity columns never hand out a value twice, so ids of deleted rows
/// are not reused.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running appointment migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            patient_name TEXT NOT NULL,
            doctor_name TEXT NOT NULL,
            appointment_date TIMESTAMP NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Appointment migrations complete");
    Ok(())
}
