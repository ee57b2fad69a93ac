//! Domain models with validation at construction
//!
//! Request bodies are checked when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod appointment;
pub mod validation;

pub use appointment::{Appointment, AppointmentPayload, NewAppointment};
pub use validation::ValidationError;
