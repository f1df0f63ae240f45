//! Domain DTOs for the post API.
//!
//! # Design
//! These types mirror the backing API's schema (camelCase `userId` on the
//! wire, numeric server-assigned ids) but are defined independently from the
//! mock-server crate; integration tests catch schema drift. `NewPost` is the
//! only shape that ever leaves the client on a mutating call: it is built
//! from a `PostDraft` plus the fixed `OWNER_USER_ID`, so a caller-supplied
//! owner value cannot reach the wire.

use serde::{Deserialize, Serialize};

/// Owner id merged into every mutating payload. The backing API scopes all
/// writes to this fixed user.
pub const OWNER_USER_ID: u64 = 1;

/// A single post returned by the API.
///
/// `id` and `user_id` default to zero when the server omits them; a resource
/// without an id has simply not been created yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
}

/// Caller-supplied fields for creating or replacing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

/// Outgoing payload for create and update: the draft fields with the fixed
/// owner id merged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl From<&PostDraft> for NewPost {
    fn from(draft: &PostDraft) -> Self {
        Self {
            title: draft.title.clone(),
            body: draft.body.clone(),
            user_id: OWNER_USER_ID,
        }
    }
}
