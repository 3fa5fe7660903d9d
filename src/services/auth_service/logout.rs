use log::info;

use crate::api::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Forgets the stored token. Nothing is sent to the server.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().clear()?;
        info!("signed out");
        Ok(())
    }
}
