//! Appointment records
//!
//! `NewAppointment` is an appointment the database hasn't assigned an id to
//! yet; `Appointment` is a stored row. Both are only constructed from input
//! that passed the presence checks in [`AppointmentPayload::validate`].

use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Postgres keeps timestamps to the microsecond.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Stored appointment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub patient_name: String,
    pub doctor_name: String,
    pub appointment_date: NaiveDateTime,
    /// Freeform; "Scheduled" and "Completed" are the values in use.
    pub status: String,
}

/// Appointment awaiting insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_name: String,
    pub doctor_name: String,
    pub appointment_date: NaiveDateTime,
    pub status: String,
}

impl NewAppointment {
    /// Attach the id the database assigned.
    pub fn with_id(self, id: i32) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name,
            doctor_name: self.doctor_name,
            appointment_date: self.appointment_date,
            status: self.status,
        }
    }
}

/// Request body for create and update.
///
/// Every field is optional so a missing field surfaces as a
/// [`ValidationError`] instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub id: Option<i32>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub appointment_date: Option<NaiveDateTime>,
    pub status: Option<String>,
}

impl AppointmentPayload {
    /// Check that every required field is present and non-blank.
    ///
    /// The body id is not part of the result; callers decide what it means.
    /// The date is cut to microseconds, the precision of a `TIMESTAMP` column,
    /// so the record handed back on create matches what a later read returns.
    ///
    /// # Example
    /// ```
    /// use hospital_server::models::AppointmentPayload;
    ///
    /// let payload: AppointmentPayload = serde_json::from_str(
    ///     r#"{"patientName":"John Doe","doctorName":"Dr. Smith",
    ///         "appointmentDate":"2025-01-01T10:00:00","status":"Scheduled"}"#,
    /// ).unwrap();
    /// assert!(payload.validate().is_ok());
    ///
    /// assert!(AppointmentPayload::default().validate().is_err());
    /// ```
    pub fn validate(self) -> Result<NewAppointment, ValidationError> {
        Ok(NewAppointment {
            patient_name: required_text(self.patient_name, "patientName")?,
            doctor_name: required_text(self.doctor_name, "doctorName")?,
            appointment_date: self
                .appointment_date
                .ok_or(ValidationError::Missing {
                    field: "appointmentDate",
                })?
                .trunc_subsecs(STORED_SUBSEC_DIGITS),
            status: required_text(self.status, "status")?,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(s) if s.trim().is_empty() => Err(ValidationError::Empty { field }),
        Some(s) => Ok(s),
    }
}
