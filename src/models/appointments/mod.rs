pub mod appointment;

pub use appointment::{AppointmentRequest, AppointmentUpdate, CancelAppointmentRequest};
