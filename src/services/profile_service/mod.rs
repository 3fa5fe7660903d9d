use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::ProfileUpdate;

impl ApiClient {
    pub async fn get_profile(&self) -> Result<Value, ApiError> {
        self.get("/users/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Value, ApiError> {
        self.send(Method::PUT, "/users/profile", Some(update)).await
    }
}
