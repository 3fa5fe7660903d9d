use log::info;
use reqwest::Method;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::Credentials;

impl ApiClient {
    /// `POST /auth/login`. The token in the response is not stored; use
    /// [`ApiClient::login_and_store`] for that.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.send(Method::POST, "/auth/login", Some(credentials)).await
    }

    /// Logs in and keeps the returned `token` in the session, so every later
    /// call goes out authenticated. A response without a token string leaves
    /// the session as it was.
    pub async fn login_and_store(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let data = self.login(credentials).await?;
        if let Some(token) = data.get("token").and_then(Value::as_str) {
            self.session().set_token(token)?;
            info!("signed in as {}", credentials.email);
        }
        Ok(data)
    }
}
