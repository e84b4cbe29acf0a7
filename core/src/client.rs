//! Stateless HTTP request builder and response parser for the Trakt API.
//!
//! # Design
//! `TraktClient` holds the base URL, the application's API key, and an
//! optional OAuth access token; nothing about it mutates between calls.
//! Endpoint groups hang off accessor methods (`users()`, `comments()`, ...)
//! and every operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::services::comments::Comments;
use crate::services::movies::Movies;
use crate::services::shows::Shows;
use crate::services::sync::Sync;
use crate::services::users::Users;

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.trakt.tv";

/// Value of the `trakt-api-version` header on every request.
pub const API_VERSION: &str = "2";

/// Stateless client for the Trakt API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`, so one client can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct TraktClient {
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl TraktClient {
    /// Client for the production host, identified by the application's API
    /// key. Endpoints that act on user data additionally need an access
    /// token, see [`TraktClient::with_access_token`].
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.to_string(),
            access_token: None,
        }
    }

    /// Point the client at a different host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Attach an OAuth access token; it is sent as a bearer `authorization`
    /// header on every request from then on.
    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn movies(&self) -> Movies<'_> {
        Movies { client: self }
    }

    pub fn shows(&self) -> Shows<'_> {
        Shows { client: self }
    }

    pub fn sync(&self) -> Sync<'_> {
        Sync { client: self }
    }

    pub(crate) fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            headers: self.headers(false),
            body: None,
        }
    }

    pub(crate) fn post_json<T: Serialize>(
        &self,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: self.headers(true),
            body: Some(body),
        })
    }

    pub(crate) fn delete(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{path}", self.base_url),
            headers: self.headers(false),
            body: None,
        }
    }

    fn headers(&self, has_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![
            ("trakt-api-key".to_string(), self.api_key.clone()),
            ("trakt-api-version".to_string(), API_VERSION.to_string()),
        ];
        if let Some(token) = &self.access_token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        if has_body {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        headers
    }
}

/// Join the present pairs into a `?a=1&b=2` suffix; empty when nothing is
/// set, so optional parameters simply drop out of the path.
pub(crate) fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let joined: Vec<String> = pairs
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}={v}")))
        .collect();
    if joined.is_empty() {
        String::new()
    } else {
        format!("?{}", joined.join("&"))
    }
}

/// Decode a JSON body after the status check.
pub(crate) fn parse_json<T: DeserializeOwned>(
    response: HttpResponse,
    expected: u16,
) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Status check for endpoints whose success response has no body.
pub(crate) fn parse_empty(response: HttpResponse, expected: u16) -> Result<(), ApiError> {
    check_status(&response, expected)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
