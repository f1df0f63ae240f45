//! Outcome views rendered by the controller.
//!
//! A view is a category plus a title and optional detail text. Showing one
//! replaces whatever the display currently holds — there is no history, the
//! last outcome wins.

/// Category of a rendered outcome view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The request itself was bad: a local precondition failed or the server
    /// rejected it with an error status.
    Validation,
    /// The ambient connectivity signal reported offline.
    Network,
    /// The server could not be reached at all.
    Server,
    Success,
}

impl MessageKind {
    /// Stable label identifying the category in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::Validation => "validation-error",
            MessageKind::Network => "network-error",
            MessageKind::Server => "server-error",
            MessageKind::Success => "success",
        }
    }
}

/// A single outcome view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub detail: Option<String>,
}

impl Message {
    pub fn new(kind: MessageKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(
        kind: MessageKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }
}
