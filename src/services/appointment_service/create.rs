use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::AppointmentRequest;

impl ApiClient {
    pub async fn create_appointment(
        &self,
        appointment: &AppointmentRequest,
    ) -> Result<Value, ApiError> {
        self.send(Method::POST, "/appointments", Some(appointment)).await
    }
}
