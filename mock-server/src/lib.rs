use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Payload for create and full-replace update.
#[derive(Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
}

pub type Db = Arc<RwLock<HashMap<u64, Post>>>;

#[derive(Clone, Default)]
pub struct AppState {
    db: Db,
    next_id: Arc<AtomicU64>,
}

pub fn app() -> Router {
    let state = AppState::default();
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<PostPayload>,
) -> (StatusCode, Json<Post>) {
    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let post = Post {
        id,
        title: input.title,
        body: input.body,
        user_id: input.user_id,
    };
    state.db.write().await.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, StatusCode> {
    let posts = state.db.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// PUT is full replace: every stored field except the id comes from the
/// incoming payload.
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<PostPayload>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = state.db.write().await;
    let post = posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.title = input.title;
    post.body = input.body;
    post.user_id = input.user_id;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut posts = state.db.write().await;
    posts.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_json() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
            body: "Body".to_string(),
            user_id: 1,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["body"], "Body");
        assert_eq!(json["userId"], 1);
    }

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post {
            id: 42,
            title: "Roundtrip".to_string(),
            body: "Text".to_string(),
            user_id: 1,
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.title, post.title);
        assert_eq!(back.body, post.body);
        assert_eq!(back.user_id, post.user_id);
    }

    #[test]
    fn payload_defaults_user_id_to_zero() {
        let input: PostPayload =
            serde_json::from_str(r#"{"title":"No owner","body":"B"}"#).unwrap();
        assert_eq!(input.title, "No owner");
        assert_eq!(input.user_id, 0);
    }

    #[test]
    fn payload_accepts_explicit_user_id() {
        let input: PostPayload =
            serde_json::from_str(r#"{"title":"T","body":"B","userId":1}"#).unwrap();
        assert_eq!(input.user_id, 1);
    }

    #[test]
    fn payload_rejects_missing_title() {
        let result: Result<PostPayload, _> = serde_json::from_str(r#"{"body":"B"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_rejects_missing_body() {
        let result: Result<PostPayload, _> = serde_json::from_str(r#"{"title":"T"}"#);
        assert!(result.is_err());
    }
}
