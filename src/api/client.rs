use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::interceptors;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::session::{NoopHandler, Session, UnauthorizedHandler};

/// Typed facade over the practice backend.
///
/// Endpoint methods return the response body as JSON. A body that is not
/// JSON comes back as `Value::String` holding the raw text, and an empty
/// body (such as a 204) comes back as `Value::Null`.
///
/// Clones share the same connection pool, session and unauthorized hook, so
/// one client can be handed to every caller.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    session: Session,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers.clone())
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
            on_unauthorized: Arc::new(NoopHandler),
        })
    }

    /// Client configured from the environment with an in-memory session.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env(), Session::in_memory())
    }

    pub fn with_unauthorized_handler<H>(mut self, handler: H) -> Self
    where
        H: UnauthorizedHandler + 'static,
    {
        self.on_unauthorized = Arc::new(handler);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a request and deserializes the response payload into `T`.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self.send(method, path, body).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, &url);
        // `json` also sets Content-Type, so bodiless requests go out without it
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let builder = interceptors::attach_token(builder, &self.session)?;

        let response = builder.send().await?;
        interceptors::handle_response(response, &self.session, self.on_unauthorized.as_ref()).await
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send::<()>(Method::GET, path, None).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
