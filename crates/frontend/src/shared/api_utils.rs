//! HTTP plumbing shared by every page: one error type, one client carrying
//! the bearer token, and the multipart helper used by the upload forms.

use contracts::shared::validation::ValidationError;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::shared::config::{use_config, AppConfig};
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("You are not signed in.")]
    NotAuthenticated,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Could not build request: {0}")]
    Build(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    fn build(err: impl std::fmt::Debug) -> Self {
        ApiError::Build(format!("{:?}", err))
    }
}

/// User-facing text for a non-2xx response. Prefers the server's own
/// `message` / `error` field, falling back to the status code.
pub fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// Stateless client: base URL plus an optional bearer token snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            base: config.api_base.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.header("Authorization", &format!("Bearer {}", token)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorized(Request::get(&self.url(path)))?;
        decode(send(request.build().map_err(ApiError::build)?).await?).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let qs = serde_qs::to_string(query).map_err(ApiError::build)?;
        self.get(&format!("{}?{}", path, qs)).await
    }

    /// POST where only success matters; the body is ignored.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::post(&self.url(path)))?
            .json(body)
            .map_err(ApiError::build)?;
        send(request).await.map(|_| ())
    }

    /// Unauthenticated POST, used by the login form.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(ApiError::build)?;
        decode(send(request).await?).await
    }

    /// PUT where only success matters; the body is ignored.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::put(&self.url(path)))?
            .json(body)
            .map_err(ApiError::build)?;
        send(request).await.map(|_| ())
    }

    /// Multipart POST. The browser sets the boundary header itself.
    pub async fn post_form(&self, path: &str, form: FormData) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::post(&self.url(path)))?
            .body(form)
            .map_err(ApiError::build)?;
        send(request).await.map(|_| ())
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: status_message(status, &body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Text parts first, then every file under `file_field`.
pub fn multipart(
    fields: &[(&'static str, String)],
    file_field: &str,
    files: &[File],
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::build)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(ApiError::build)?;
    }
    for file in files {
        form.append_with_blob_and_filename(file_field, file, &file.name())
            .map_err(ApiError::build)?;
    }
    Ok(form)
}

/// Client for the current session. Call during component setup and keep the
/// result in a `StoredValue` for use inside handlers.
pub fn use_api() -> ApiClient {
    let config = use_config();
    let session = use_session();
    ApiClient::new(&config, session.token_untracked())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_server_text() {
        assert_eq!(
            status_message(400, r#"{"message":"Email already exists"}"#),
            "Email already exists"
        );
        assert_eq!(status_message(401, r#"{"error":"Invalid credentials"}"#), "Invalid credentials");
        assert_eq!(status_message(500, "<html>oops</html>"), "Request failed with status 500");
        assert_eq!(status_message(404, r#"{"message":""}"#), "Request failed with status 404");
    }

    #[test]
    fn validation_errors_pass_through_unchanged() {
        let err: ApiError = ValidationError::Missing("a title").into();
        assert_eq!(err.to_string(), "Please enter a title.");
    }

    #[test]
    fn client_joins_base_and_path() {
        let config = AppConfig {
            api_base: "http://localhost:4000".into(),
        };
        let client = ApiClient::new(&config, None);
        assert_eq!(client.url("/tickets/7"), "http://localhost:4000/tickets/7");
    }
}
