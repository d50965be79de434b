//! HTTP Client for the Remote Storefront API
//!
//! Wraps outbound requests with the concerns every call shares:
//! - Attaching the bearer token when one is persisted
//! - Decoding the standard response envelope
//! - Extracting human-readable messages from rejection bodies
//! - Tearing down the session on a 401 from a protected endpoint
//!
//! A 401 from a *public* endpoint (login, register, the OTP flows)
//! means bad credentials, not an expired session, and is surfaced as a
//! plain rejection. Session teardown clears the persisted token and
//! emits a [`SessionEvent::Expired`]; navigation is the shell's job.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use kernel::envelope::{ApiEnvelope, ErrorBody};
use kernel::error::app_error::GENERIC_ERROR_MESSAGE;

use crate::config::ApiConfig;
use crate::event::{SessionEvent, SessionEventSender};
use crate::token::TokenStore;

// ============================================================================
// Public endpoints
// ============================================================================

/// Endpoints reachable without a valid session.
///
/// A 401 from any of these must never clear the session.
pub const PUBLIC_ENDPOINTS: &[&str] = &[
    "/auth/register",
    "/auth/login",
    "/auth/request-verify",
    "/auth/verify-account",
    "/auth/forgot-password",
    "/auth/reset-password",
];

/// Whether the path belongs to the public endpoint set
pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|e| path.contains(e))
}

/// Whether a response must tear the session down
pub fn should_clear_session(status: u16, path: &str) -> bool {
    status == 401 && !is_public_endpoint(path)
}

// ============================================================================
// Error Types
// ============================================================================

/// HTTP layer errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with an error status; `message` was extracted
    /// from the response body
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A protected call answered 401; the session has been torn down
    #[error("session expired")]
    SessionExpired,

    /// The request never completed
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected envelope
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Message suitable for a transient notification
    pub fn user_message(&self) -> String {
        match self {
            HttpError::Rejected { message, .. } => message.clone(),
            HttpError::SessionExpired => {
                "Your session has expired, please sign in again".to_string()
            }
            HttpError::Transport(_) | HttpError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the remote API
#[derive(Debug, Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<S>,
    events: Option<SessionEventSender>,
}

impl<S> ApiClient<S>
where
    S: TokenStore + Send + Sync,
{
    pub fn new(config: ApiConfig, tokens: Arc<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
            events: None,
        }
    }

    /// Attach the session event channel the shell listens on
    pub fn with_session_events(mut self, events: SessionEventSender) -> Self {
        self.events = Some(events);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<S> {
        &self.tokens
    }

    /// GET an enveloped JSON resource
    pub async fn get<T>(&self, path: &str) -> Result<ApiEnvelope<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let req = self.http.get(self.config.endpoint(path));
        self.execute(path, req).await
    }

    /// GET with query parameters
    pub async fn get_with_query<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let req = self.http.get(self.config.endpoint(path)).query(query);
        self.execute(path, req).await
    }

    /// POST a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiEnvelope<T>, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.config.endpoint(path)).json(body);
        self.execute(path, req).await
    }

    /// POST without a body (refresh, logout, request-verify)
    pub async fn post_empty<T>(&self, path: &str) -> Result<ApiEnvelope<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let req = self.http.post(self.config.endpoint(path));
        self.execute(path, req).await
    }

    /// POST a multipart form (product creation)
    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiEnvelope<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let req = self.http.post(self.config.endpoint(path)).multipart(form);
        self.execute(path, req).await
    }

    async fn execute<T>(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<ApiEnvelope<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        // The persisted token is read per request so a login or
        // logout in another task is picked up immediately.
        let req = match self.tokens.load().await {
            Ok(Some(token)) => req.bearer_auth(token.expose()),
            Ok(None) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted token");
                req
            }
        };

        let response = req.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        if (200..300).contains(&status) {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        if should_clear_session(status, path) {
            self.expire_session().await;
            return Err(HttpError::SessionExpired);
        }

        let message = ErrorBody::from_bytes(&bytes).extract_message();
        tracing::debug!(path, status, "API rejected request");
        Err(HttpError::Rejected { status, message })
    }

    /// Session teardown: runs exactly once per failing response since
    /// there is no retry anywhere in the client.
    async fn expire_session(&self) {
        if let Err(e) = self.tokens.clear().await {
            tracing::warn!(error = %e, "Failed to remove persisted token");
        }
        if let Some(events) = &self.events {
            // The receiver may already be gone during shutdown.
            let _ = events.send(SessionEvent::Expired);
        }
        tracing::info!("Session expired, persisted token cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::event::session_event_channel;
    use crate::token::MemoryTokenStore;

    /// Serve exactly one HTTP response on a local port and return the
    /// base URL pointing at it
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n{body}",
            body.len()
        );
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_protected_401_tears_down_session() {
        let base_url = serve_once("401 Unauthorized", r#"{"message":"jwt expired"}"#).await;
        let tokens = Arc::new(MemoryTokenStore::with_token("stale-jwt"));
        let (tx, mut rx) = session_event_channel();
        let client =
            ApiClient::new(ApiConfig { base_url }, Arc::clone(&tokens)).with_session_events(tx);

        let result = client.get::<serde_json::Value>("/users/me").await;
        assert!(matches!(result, Err(HttpError::SessionExpired)));

        // Token is gone and exactly one expiry event was emitted
        assert!(tokens.load().await.unwrap().is_none());
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_login_401_is_a_plain_rejection() {
        let base_url = serve_once("401 Unauthorized", r#"{"message":"Invalid credentials"}"#).await;
        let tokens = Arc::new(MemoryTokenStore::with_token("still-valid"));
        let (tx, mut rx) = session_event_channel();
        let client =
            ApiClient::new(ApiConfig { base_url }, Arc::clone(&tokens)).with_session_events(tx);

        let result = client
            .post::<_, serde_json::Value>("/auth/login", &serde_json::json!({"email": "a@b.co"}))
            .await;
        match result {
            Err(HttpError::Rejected { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        // Bad credentials must not touch the stored session
        assert!(tokens.load().await.unwrap().is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_public_endpoint_set() {
        assert!(is_public_endpoint("/auth/login"));
        assert!(is_public_endpoint("/auth/register"));
        assert!(is_public_endpoint("/auth/request-verify"));
        assert!(is_public_endpoint("/auth/verify-account"));
        assert!(is_public_endpoint("/auth/forgot-password"));
        assert!(is_public_endpoint("/auth/reset-password"));

        assert!(!is_public_endpoint("/auth/refresh"));
        assert!(!is_public_endpoint("/auth/logout"));
        assert!(!is_public_endpoint("/auth/change-password"));
        assert!(!is_public_endpoint("/users/me"));
        assert!(!is_public_endpoint("/products"));
    }

    #[test]
    fn test_should_clear_session() {
        // 401 on a protected endpoint tears the session down
        assert!(should_clear_session(401, "/users/me"));
        assert!(should_clear_session(401, "/auth/refresh"));

        // 401 on a public endpoint is a credentials failure
        assert!(!should_clear_session(401, "/auth/login"));
        assert!(!should_clear_session(401, "/auth/reset-password"));

        // Other statuses never tear the session down
        assert!(!should_clear_session(403, "/users/me"));
        assert!(!should_clear_session(500, "/users/me"));
    }

    #[test]
    fn test_user_message() {
        let err = HttpError::Rejected {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Email already registered");

        let err = HttpError::SessionExpired;
        assert!(err.user_message().contains("session has expired"));

        let err = HttpError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
