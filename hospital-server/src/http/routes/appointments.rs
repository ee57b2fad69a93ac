//! Appointment endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{AppointmentId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Appointment, AppointmentPayload, ValidationError};

/// GET /api/appointments - list all appointments
async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = state.appointments.list_all().await?;
    Ok(Json(appointments))
}

/// GET /api/appointments/{id} - get a single appointment
async fn get_appointment(
    State(state): State<Arc<AppState>>,
    AppointmentId(id): AppointmentId,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = state
        .appointments
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    Ok(Json(appointment))
}

/// POST /api/appointments - create an appointment
///
/// Any id in the body is ignored; the database assigns one.
async fn create_appointment(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<AppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let new = payload.validate()?;
    let id = state.appointments.create(&new).await?;
    tracing::info!(id, "appointment created");

    let location = format!("/api/appointments/{}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(new.with_id(id)),
    ))
}

/// PUT /api/appointments/{id} - replace an appointment
///
/// The body id must equal the path id; that is checked before anything
/// else, including field validation.
async fn update_appointment(
    State(state): State<Arc<AppState>>,
    AppointmentId(id): AppointmentId,
    ValidJson(payload): ValidJson<AppointmentPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id != Some(id) {
        tracing::debug!(path_id = id, body_id = ?payload.id, "rejecting update");
        return Err(ValidationError::IdMismatch.into());
    }

    let appointment = payload.validate()?.with_id(id);
    if !state.appointments.update(&appointment).await? {
        return Err(ApiError::NotFound { id });
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/appointments/{id} - delete an appointment
async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    AppointmentId(id): AppointmentId,
) -> Result<StatusCode, ApiError> {
    if !state.appointments.delete_by_id(id).await? {
        return Err(ApiError::NotFound { id });
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Appointment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/appointments", get(list_appointments).post(create_appointment))
        .route(
            "/api/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}
