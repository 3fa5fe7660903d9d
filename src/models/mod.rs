// src/models/mod.rs

pub mod appointments;
pub mod auth;
pub mod contact;
pub mod users;

pub use appointments::{AppointmentRequest, AppointmentUpdate, CancelAppointmentRequest};
pub use auth::{Credentials, RegistrationData};
pub use contact::ContactMessage;
pub use users::ProfileUpdate;
