//! HTTP access to the marketplace API
//!
//! Every request carries the stored token as a bearer credential when one
//! exists. A 401 response clears the session and sends the user to the
//! sign-in screen before the error reaches the caller; every other failure
//! is passed through untouched.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;

use crate::auth::SessionStore;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Client bound to one API base address and one session
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for `config.base_url` that authenticates through `session`
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    /// PATCH without a body; the API's PATCH routes are state transitions
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::PATCH, path)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = self.intercept(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn intercept(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url = %response.url(), "Credentials rejected, ending session");
            self.session.invalidate().await;
            let message = error_message(response).await;
            return Err(Error::Unauthorized { message });
        }

        if status.is_client_error() || status.is_server_error() {
            tracing::debug!(url = %response.url(), status = status.as_u16(), "Request failed");
            let message = error_message(response).await;
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// Upper bound on reading an error body, so a stalled body cannot hold up the caller
const ERROR_BODY_TIMEOUT: Duration = Duration::from_secs(2);

/// Human-readable text from an error body, if the server sent one in time
async fn error_message(response: Response) -> Option<String> {
    let body = match timeout(ERROR_BODY_TIMEOUT, response.json::<serde_json::Value>()).await {
        Ok(body) => body.ok()?,
        Err(_) => {
            tracing::debug!("Error body not received in time");
            return None;
        }
    };
    extract_message(&body)
}

fn extract_message(body: &serde_json::Value) -> Option<String> {
    // `msg` is what the server's JWT layer uses for its own rejections
    ["error", "message", "msg"]
        .iter()
        .find_map(|key| body.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message_order() {
        assert_eq!(
            extract_message(&json!({"error": "a", "message": "b"})).as_deref(),
            Some("a")
        );
        assert_eq!(extract_message(&json!({"message": "b"})).as_deref(), Some("b"));
        assert_eq!(
            extract_message(&json!({"msg": "Token has expired"})).as_deref(),
            Some("Token has expired")
        );
    }

    #[test]
    fn test_extract_message_ignores_non_strings() {
        assert_eq!(extract_message(&json!({"error": 42})), None);
        assert_eq!(extract_message(&json!(["error"])), None);
    }
}
