use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::AppointmentUpdate;

impl ApiClient {
    pub async fn update_appointment(
        &self,
        id: &str,
        update: &AppointmentUpdate,
    ) -> Result<Value, ApiError> {
        self.send(Method::PUT, &format!("/appointments/{}", id), Some(update))
            .await
    }
}
