use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_appointments(&self) -> Result<Value, ApiError> {
        self.get("/appointments").await
    }

    pub async fn get_appointment(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("/appointments/{}", id)).await
    }
}
