use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Counseling services the practice offers.
    pub async fn get_services(&self) -> Result<Value, ApiError> {
        self.get("/services").await
    }
}
