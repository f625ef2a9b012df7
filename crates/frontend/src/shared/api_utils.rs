//! API plumbing for frontend-backend communication: base URL
//! construction, the typed error, and an envelope-aware request client.

use std::fmt;

use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for API requests, derived from the current window location
/// (backend listens on port 5000). This is the single configuration
/// source; no page hardcodes a host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// What went wrong with a request. Everything here is recoverable: the
/// form stays usable and the user can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS).
    Network(String),
    /// Non-2xx response with no parseable envelope.
    Status(u16),
    /// The backend answered with `success: false` and a message.
    Server(String),
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Status(code) => write!(f, "HTTP {}", code),
            ApiError::Server(msg) => write!(f, "{}", msg),
            ApiError::Decode(e) => write!(f, "unexpected response: {}", e),
        }
    }
}

impl ApiError {
    /// Text suitable for a toast: the server's own message when there is
    /// one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(msg) => msg.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Envelope-aware HTTP client carrying the caller's credentials.
///
/// Constructed with an explicit token (tests) or from the stored
/// session; nothing else in the frontend reads the token storage.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Client authorized with the current session's bearer token.
    pub fn from_session() -> Self {
        Self::new(crate::system::auth::storage::get_token())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// POST for acknowledgement-only endpoints; returns the server's
    /// confirmation message, if any.
    pub async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text) {
            Ok(env) => env.into_ack().map_err(ApiError::Server),
            Err(_) => Err(ApiError::Status(status)),
        }
    }
}

/// Unwrap `{ success, data, message }`. A non-2xx body that still
/// carries an envelope surfaces the server's message; anything else
/// falls back to the bare status code.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match serde_json::from_str::<ApiEnvelope<T>>(&text) {
        Ok(envelope) => envelope.into_result().map_err(ApiError::Server),
        Err(_) if status >= 400 => Err(ApiError::Status(status)),
        Err(e) => {
            log::warn!("response body did not match expected shape: {}", e);
            Err(ApiError::Decode(e.to_string()))
        }
    }
}
