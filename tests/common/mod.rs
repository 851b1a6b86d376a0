//! Shared helpers for integration tests

#![allow(dead_code)]

use freelance_match::api::ApiClient;
use freelance_match::auth::{MemoryTokenStorage, Navigator, Route, SessionStore};
use freelance_match::config::ApiConfig;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Sign a token the way the server does; the client never sees this key
pub fn make_token(sub: &str, role: &str, exp: Option<i64>) -> String {
    let mut claims = json!({ "sub": sub, "role": role, "iat": now() });
    if let Some(exp) = exp {
        claims["exp"] = json!(exp);
    }
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"server-side-secret"),
    )
    .expect("Failed to sign token")
}

/// Token valid for another hour
pub fn valid_token(sub: &str, role: &str) -> String {
    make_token(sub, role, Some(now() + 3600))
}

/// Token that expired a minute ago
pub fn expired_token(sub: &str, role: &str) -> String {
    make_token(sub, role, Some(now() - 60))
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Navigator that remembers every route it was sent to
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Session over in-memory storage, optionally preloaded with `token`
pub fn session_with(token: Option<String>) -> (SessionStore, MemoryTokenStorage, RecordingNavigator) {
    let storage = match token {
        Some(token) => MemoryTokenStorage::with_token(token),
        None => MemoryTokenStorage::new(),
    };
    let navigator = RecordingNavigator::default();
    let session = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(navigator.clone()));
    (session, storage, navigator)
}

/// Client pointed at a mock server
pub fn client_for(base_url: &str, session: SessionStore) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    };
    ApiClient::new(&config, session).expect("Failed to build client")
}
