//! Stateless HTTP request builder and response parser for the post API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the round trip in between, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! The client never classifies failures. It reports exactly what happened —
//! empty id, non-success status, undecodable body — and leaves deciding what
//! that means to the presentation layer.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewPost, Post, PostDraft};

/// Synchronous, stateless client for the post API.
///
/// The base URL names the post collection itself; item-level operations
/// append `/{id}`. Every mutating payload carries the fixed owner id (see
/// `types::OWNER_USER_ID`) regardless of caller input.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_post(&self, id: &str) -> Result<HttpRequest, ApiError> {
        let id = require_id(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_create_post(&self, draft: &PostDraft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(encode_payload(draft)?),
        })
    }

    pub fn build_update_post(&self, id: &str, draft: &PostDraft) -> Result<HttpRequest, ApiError> {
        let id = require_id(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(encode_payload(draft)?),
        })
    }

    pub fn build_delete_post(&self, id: &str) -> Result<HttpRequest, ApiError> {
        let id = require_id(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Delete has no meaningful body; the response is never decoded.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<bool, ApiError> {
        check_status(&response)?;
        Ok(true)
    }
}

/// Item-level operations need a non-empty id to form the request path.
fn require_id(id: &str) -> Result<&str, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id)
}

/// Serialize the outgoing mutating payload, merging in the fixed owner id.
fn encode_payload(draft: &PostDraft) -> Result<String, ApiError> {
    serde_json::to_string(&NewPost::from(draft))
        .map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Map any status outside the 2xx success range to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
