use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::ContactMessage;

impl ApiClient {
    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<Value, ApiError> {
        self.send(Method::POST, "/contact", Some(message)).await
    }
}
