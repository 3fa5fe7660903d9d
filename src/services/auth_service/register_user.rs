// src/services/auth_service/register_user.rs

use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::RegistrationData;

impl ApiClient {
    pub async fn register(&self, user: &RegistrationData) -> Result<Value, ApiError> {
        self.send(Method::POST, "/auth/register", Some(user)).await
    }
}
