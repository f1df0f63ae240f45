//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — a `Transport` implementation is responsible
//! for executing the actual I/O. This separation keeps the core deterministic
//! and easy to test, and lets several transports drive the same client.
//!
//! A `Transport` must hand back every *completed* HTTP exchange as an
//! `HttpResponse`, error statuses included. `TransportError` is reserved for
//! round trips that never completed (DNS failure, connection refused,
//! timeout). Callers classify the two cases differently, so they must never
//! be collapsed into one.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PostClient::build_*` methods and executed by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `PostClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The round trip did not complete: no HTTP response was received.
///
/// Carries the underlying transport's own message. A response that arrived
/// with an error status is not a `TransportError`.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "network request failed: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Executes `HttpRequest` values against a real server.
///
/// Implementations return `Ok` for every exchange that produced an HTTP
/// response, whatever the status code, and `Err` only when the request could
/// not complete at all.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
