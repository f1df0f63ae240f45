//! Presentation layer for the post service.
//!
//! # Overview
//! Wraps `post_core` with everything a front end needs: two real transports,
//! the controller that drives one CRUD action per user gesture, the central
//! failure classification, and the outcome views it renders. The binary in
//! `main.rs` is only the glue that turns CLI gestures into controller calls.

pub mod config;
pub mod controller;
pub mod message;
pub mod transport;

pub use config::AppConfig;
pub use controller::{Connectivity, Controller, Form, FormData, MessageSink};
pub use message::{Message, MessageKind};
pub use transport::{ReqwestTransport, UreqTransport};
