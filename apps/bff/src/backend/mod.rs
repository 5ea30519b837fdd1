//! Backend API client. The only place the BFF talks HTTP to the REST backend.
//!
//! Every call is a single attempt. Non-2xx responses become
//! `BackendError::Api` carrying the backend's own status and message.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::models::master::MasterEntry;

#[cfg(test)]
pub mod fake;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The REST backend as seen by the resolvers. `BackendClient` is the real
/// implementation; tests swap in an in-memory one.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_os(&self) -> Result<Vec<MasterEntry>, BackendError>;
    async fn list_tools(&self) -> Result<Vec<MasterEntry>, BackendError>;
    async fn list_languages(&self) -> Result<Vec<MasterEntry>, BackendError>;

    async fn login(&self, email: &str, password: &str) -> Result<Value, BackendError>;
    async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, BackendError>;

    /// `GET /resume`, or `GET /resume/user/{id}` when a user is given.
    async fn list_resumes(&self, user_id: Option<i32>) -> Result<Value, BackendError>;
    /// `None` when the backend answers 404.
    async fn get_resume(&self, id: i32) -> Result<Option<Value>, BackendError>;
    async fn create_resume(&self, body: &Value) -> Result<Value, BackendError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(config.backend_timeout).build()?,
            base_url: config.backend_api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let body = self.send(self.client.get(self.url(path)), path).await?;
        decode_logged(&body, path)
    }

    async fn post_json(&self, path: &str, payload: &Value) -> Result<Value, BackendError> {
        let body = self
            .send(self.client.post(self.url(path)).json(payload), path)
            .await?;
        decode_logged(&body, path)
    }

    /// Sends a request and returns the raw body of a 2xx response.
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<String, BackendError> {
        let response = request.send().await.map_err(|e| {
            error!("Backend request to {path} failed: {e}");
            BackendError::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read backend {path} response ({status}): {e}");
            BackendError::Http(e)
        })?;

        if !status.is_success() {
            let message = error_message(&body, status);
            if status.is_server_error() {
                error!("Backend {path} returned {status}: {message}");
            } else {
                warn!("Backend {path} returned {status}: {message}");
            }
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Backend {path} returned {status} ({} bytes)", body.len());
        Ok(body)
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn list_os(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.get_json("/os").await
    }

    async fn list_tools(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.get_json("/tools").await
    }

    async fn list_languages(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.get_json("/languages").await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Value, BackendError> {
        self.post_json("/login", &json!({ "email": email, "password": password }))
            .await
    }

    async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, BackendError> {
        self.post_json(
            "/signup",
            &json!({ "username": username, "email": email, "password": password }),
        )
        .await
    }

    async fn list_resumes(&self, user_id: Option<i32>) -> Result<Value, BackendError> {
        match user_id {
            Some(id) => self.get_json(&format!("/resume/user/{id}")).await,
            None => self.get_json("/resume").await,
        }
    }

    async fn get_resume(&self, id: i32) -> Result<Option<Value>, BackendError> {
        match self.get_json::<Value>(&format!("/resume/{id}")).await {
            Ok(value) => Ok(Some(value)),
            Err(BackendError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn create_resume(&self, body: &Value) -> Result<Value, BackendError> {
        self.post_json("/resume", body).await
    }
}

fn decode_logged<T: DeserializeOwned>(body: &str, path: &str) -> Result<T, BackendError> {
    decode(body).map_err(|e| {
        error!("Backend {path} returned an undecodable body: {e}");
        e
    })
}

/// Empty 2xx bodies decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    let body = body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(BackendError::Parse)
}

/// Pulls a human-readable message out of an error body: `{"error": ...}` or
/// `{"message": ...}` when present, else the raw text.
fn error_message(body: &str, status: StatusCode) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["error", "message"]
            .iter()
            .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        None => body.trim().to_string(),
    }
}
