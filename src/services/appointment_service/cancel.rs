use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::CancelAppointmentRequest;

impl ApiClient {
    /// `PATCH /appointments/{id}/cancel`. Without a reason the body is `{}`.
    pub async fn cancel_appointment(&self, id: &str, reason: Option<&str>) -> Result<Value, ApiError> {
        let body = CancelAppointmentRequest {
            reason: reason.map(str::to_string),
        };
        self.send(Method::PATCH, &format!("/appointments/{}/cancel", id), Some(&body))
            .await
    }
}
