//! Presentation controller: one user action per call, central failure
//! classification, exactly one rendered outcome per action.
//!
//! # Design
//! The controller owns the client, two transports, and three collaborator
//! seams (connectivity, form, display sink). Every action runs the same
//! build/execute/parse shape against the core client and funnels any failure
//! through one `classify` step, so a read taken through either transport and
//! a rejected write all render by the same rules.
//!
//! No locking: each action is triggered by a distinct user gesture, and when
//! gestures overlap the last outcome to arrive owns the display.

use post_core::{ApiError, Post, PostClient, PostDraft, Transport};
use tracing::{debug, warn};

use crate::message::{Message, MessageKind};

/// Snapshot of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Read-only key-value access to the current form state, plus reset.
pub trait Form {
    fn read(&self) -> FormData;
    fn reset(&mut self);
}

/// Ambient connectivity signal, sampled at the moment a failure is
/// classified.
pub trait Connectivity {
    fn is_online(&self) -> bool;
}

/// Display region for outcome views. Showing a message replaces whatever was
/// displayed before.
pub trait MessageSink {
    fn show(&mut self, message: Message);
}

pub struct Controller {
    client: PostClient,
    transport: Box<dyn Transport>,
    alternate: Box<dyn Transport>,
    connectivity: Box<dyn Connectivity>,
    form: Box<dyn Form>,
    sink: Box<dyn MessageSink>,
}

impl Controller {
    pub fn new(
        client: PostClient,
        transport: Box<dyn Transport>,
        alternate: Box<dyn Transport>,
        connectivity: Box<dyn Connectivity>,
        form: Box<dyn Form>,
        sink: Box<dyn MessageSink>,
    ) -> Self {
        Self {
            client,
            transport,
            alternate,
            connectivity,
            form,
            sink,
        }
    }

    /// Read one post via the primary transport and display its title and
    /// body.
    pub fn fetch_post(&mut self, id: &str) {
        debug!(id, "fetching post");
        let result = self.read_post(false, id);
        self.show_post(result);
    }

    /// Same read via the alternate transport. Renders identically to
    /// `fetch_post` for identical server responses.
    pub fn fetch_post_alternate(&mut self, id: &str) {
        debug!(id, "fetching post via alternate transport");
        let result = self.read_post(true, id);
        self.show_post(result);
    }

    /// Create (empty form id) or update (form id present) from the current
    /// form state. Success renders the new id and title and resets the form.
    pub fn submit(&mut self) {
        let data = self.form.read();
        let draft = PostDraft {
            title: data.title,
            body: data.body,
        };
        let updating = !data.id.is_empty();
        let result = if updating {
            self.update_post(&data.id, &draft)
        } else {
            self.create_post(&draft)
        };
        match result {
            Ok(post) => {
                let title = if updating { "Post Updated" } else { "Post Created" };
                self.sink.show(Message::with_detail(
                    MessageKind::Success,
                    title,
                    format!("ID: {}\nTitle: {}", post.id, post.title),
                ));
                self.form.reset();
            }
            Err(error) => self.fail(&error),
        }
    }

    /// Delete the post named by the form id. An empty id is rejected locally,
    /// before any request is built or sent.
    pub fn delete_post(&mut self) {
        let id = self.form.read().id;
        if id.trim().is_empty() {
            self.sink
                .show(Message::new(MessageKind::Validation, "Missing Post ID"));
            return;
        }
        match self.remove_post(&id) {
            Ok(_) => {
                self.sink.show(Message::with_detail(
                    MessageKind::Success,
                    "Post Deleted",
                    format!("Post {id} removed"),
                ));
                self.form.reset();
            }
            Err(error) => self.fail(&error),
        }
    }

    fn read_post(&self, use_alternate: bool, id: &str) -> Result<Post, ApiError> {
        let transport = if use_alternate {
            self.alternate.as_ref()
        } else {
            self.transport.as_ref()
        };
        let request = self.client.build_get_post(id)?;
        let response = transport.execute(&request)?;
        self.client.parse_get_post(response)
    }

    fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let request = self.client.build_create_post(draft)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create_post(response)
    }

    fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        let request = self.client.build_update_post(id, draft)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_update_post(response)
    }

    fn remove_post(&self, id: &str) -> Result<bool, ApiError> {
        let request = self.client.build_delete_post(id)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_delete_post(response)
    }

    fn show_post(&mut self, result: Result<Post, ApiError>) {
        match result {
            Ok(post) => self.sink.show(Message::with_detail(
                MessageKind::Success,
                post.title,
                post.body,
            )),
            Err(error) => self.fail(&error),
        }
    }

    fn fail(&mut self, error: &ApiError) {
        warn!(%error, "request failed");
        let message = self.classify(error);
        self.sink.show(message);
    }

    /// Classify a failure into exactly one view.
    ///
    /// Order matters: the offline check wins over the error's own shape (a
    /// transport error observed while offline is connectivity, not the
    /// server), a transport failure wins over anything else, and the rest
    /// renders as a rejected request carrying the failure's own text.
    fn classify(&self, error: &ApiError) -> Message {
        if !self.connectivity.is_online() {
            Message::with_detail(
                MessageKind::Network,
                "Connection Error",
                "Check internet connection",
            )
        } else if error.is_transport() {
            Message::with_detail(MessageKind::Server, "Server Error", "Cannot connect to server")
        } else {
            Message::with_detail(MessageKind::Validation, "Request Failed", error.to_string())
        }
    }
}
