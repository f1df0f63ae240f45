//! Synchronous API client core for the post service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` implementation
//! executes the actual HTTP round-trip, making the core fully deterministic
//! and testable — and letting several transports drive the same client.
//!
//! # Design
//! - `PostClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Transport-level failures (`TransportError`) and error-status responses
//!   (`ApiError::HttpError`) stay distinct all the way up; the presentation
//!   layer classifies them, the core never does.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::PostClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{NewPost, Post, PostDraft, OWNER_USER_ID};
