use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use counsel_client::{ApiClient, ClientConfig, MemoryTokenStore, Session};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

/// Prefix the mock mounts the API under, mirroring the default `/api`.
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: Option<Value>,
    raw: Option<String>,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    routes: Arc<Mutex<HashMap<(String, String), Canned>>>,
}

/// Backend stand-in served by axum on an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend crashed");
        });

        Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            state,
        }
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, Canned { status, body: Some(body), raw: None, delay: None });
    }

    pub fn respond_empty(&self, method: &str, path: &str, status: u16) {
        self.insert(method, path, Canned { status, body: None, raw: None, delay: None });
    }

    pub fn respond_text(&self, method: &str, path: &str, status: u16, text: &str) {
        self.insert(
            method,
            path,
            Canned { status, body: None, raw: Some(text.to_string()), delay: None },
        );
    }

    pub fn respond_after(&self, method: &str, path: &str, delay: Duration, body: Value) {
        self.insert(
            method,
            path,
            Canned { status: 200, body: Some(body), raw: None, delay: Some(delay) },
        );
    }

    fn insert(&self, method: &str, path: &str, canned: Canned) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("Mock backend received no request")
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(&self.base_url)
    }

    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(self.config(), session).expect("Failed to build client")
    }

    pub fn anonymous_client(&self) -> ApiClient {
        self.client(Session::in_memory())
    }

    pub fn client_with_token(&self, token: &str) -> (ApiClient, Session) {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token(token)));
        (self.client(session.clone()), session)
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_string(&headers, header::AUTHORIZATION),
        content_type: header_string(&headers, header::CONTENT_TYPE),
        body: if body.is_empty() {
            None
        } else {
            serde_json::from_slice(&body).ok()
        },
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();

    let Some(canned) = canned else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "no such route"}))).into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(canned.status).unwrap();
    match (canned.body, canned.raw) {
        (Some(body), _) => (status, Json(body)).into_response(),
        (None, Some(raw)) => (status, raw).into_response(),
        (None, None) => status.into_response(),
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Unauthorized hook that records every location it was sent to.
#[allow(dead_code)]
pub fn redirect_recorder() -> (
    Arc<Mutex<Vec<String>>>,
    impl Fn(&str) + Send + Sync + 'static,
) {
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let sink = redirects.clone();
    let handler = move |location: &str| sink.lock().unwrap().push(location.to_string());
    (redirects, handler)
}
