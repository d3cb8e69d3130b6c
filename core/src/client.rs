//! Stateless HTTP request builder and response parser for the trademark API.
//!
//! # Design
//! `TrademarkClient` holds only `base_url` — the collection endpoint itself,
//! matching how the backend is addressed — and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping the client deterministic and free of I/O.
//!
//! Mutation parses try to extract the server's `{"detail": …}` message from
//! non-2xx bodies so the caller gets a user-displayable `Validation` error;
//! list and get reads map straight to `Http`/`NotFound`.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ListResponse, RecordDraft, TrademarkRecord};

/// Environment variable overriding the collection endpoint.
pub const BASE_URL_ENV: &str = "TRADEMARKS_API_URL";

/// Fallback collection endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1/trademarks";

/// Error body shape used by the backend for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Synchronous, stateless client for the trademark API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The transport executes the HTTP round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TrademarkClient {
    base_url: String,
}

impl TrademarkClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the collection endpoint from `TRADEMARKS_API_URL`, falling back
    /// to the local development backend.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    pub fn build_list(&self, offset: u32, limit: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}?skip={offset}&limit={limit}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, draft: &RecordDraft) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, draft: &RecordDraft) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<ListResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<TrademarkRecord, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TrademarkRecord, ApiError> {
        check_status_with_detail(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TrademarkRecord, ApiError> {
        check_status_with_detail(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Any 2xx is success; the response body is ignored.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status_with_detail(&response)?;
        Ok(())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map non-2xx status codes to `NotFound` or a generic `Http` error.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if is_success(response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Like `check_status`, but first tries to pull a `detail` message out of
/// the error body. A present detail wins over the 404 mapping because its
/// text is meant for the user.
fn check_status_with_detail(response: &HttpResponse) -> Result<(), ApiError> {
    if is_success(response.status) {
        return Ok(());
    }
    if let Ok(ErrorBody { detail }) = serde_json::from_str::<ErrorBody>(&response.body) {
        return Err(ApiError::Validation(detail));
    }
    check_status(response)
}
