//! Async client for the counseling practice backend.
//!
//! ```no_run
//! use counsel_client::{ApiClient, ClientConfig, Credentials, Session};
//!
//! # async fn run() -> Result<(), counsel_client::ApiError> {
//! let client = ApiClient::new(ClientConfig::from_env(), Session::in_memory())?
//!     .with_unauthorized_handler(|location: &str| println!("redirect to {}", location));
//!
//! client
//!     .login_and_store(&Credentials::new("sam@example.com", "secret"))
//!     .await?;
//! let appointments = client.get_appointments().await?;
//! println!("{}", appointments);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, StorageError};
pub use models::{
    AppointmentRequest, AppointmentUpdate, CancelAppointmentRequest, ContactMessage, Credentials,
    ProfileUpdate, RegistrationData,
};
pub use session::{
    FileTokenStore, MemoryTokenStore, NoopHandler, Session, TokenStore, UnauthorizedHandler,
    LOGIN_PATH, TOKEN_KEY,
};
