//! hospital-server: appointment records over HTTP
//!
//! Maps `/api/appointments` requests onto single SQL statements against
//! one Postgres table. Handlers reach the database only through the
//! [`AppointmentService`] trait.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use db::{AppointmentRepo, DatabaseConfig, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Appointment, AppointmentPayload, NewAppointment, ValidationError};
pub use service::AppointmentService;
