use log::warn;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::error::ApiError;
use crate::session::{Session, UnauthorizedHandler, LOGIN_PATH};

/// Runs before every request: adds `Authorization: Bearer <token>` when the
/// session holds a token and leaves the request alone otherwise.
pub fn attach_token(builder: RequestBuilder, session: &Session) -> Result<RequestBuilder, ApiError> {
    match session.token()? {
        Some(token) => Ok(builder.bearer_auth(token)),
        None => Ok(builder),
    }
}

/// Runs on every completed exchange. Success bodies pass through untouched;
/// a 401 evicts the token and fires the unauthorized hook before the failure
/// is returned to the caller.
pub async fn handle_response(
    response: Response,
    session: &Session,
    on_unauthorized: &dyn UnauthorizedHandler,
) -> Result<Value, ApiError> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        return Ok(parse_body(&bytes));
    }

    if status == StatusCode::UNAUTHORIZED {
        warn!("{} answered 401, clearing session", response.url().path());
        if let Err(e) = session.clear() {
            warn!("failed to clear stored token: {}", e);
        }
        on_unauthorized.on_unauthorized(LOGIN_PATH);
        let body = error_body(response).await;
        return Err(ApiError::Unauthorized { body });
    }

    let body = error_body(response).await;
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn error_body(response: Response) -> Value {
    match response.bytes().await {
        Ok(bytes) => parse_body(&bytes),
        Err(_) => Value::Null,
    }
}

/// JSON when the server sent JSON, otherwise the raw text as a JSON string.
/// An empty body is `Value::Null`.
pub fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
