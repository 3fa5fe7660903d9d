// Endpoint methods, grouped by backend resource. Each module adds an
// `impl ApiClient` block.

pub mod appointment_service;
pub mod auth_service;
pub mod catalog_service;
pub mod contact_service;
pub mod profile_service;
