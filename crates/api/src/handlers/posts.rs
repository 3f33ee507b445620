//! Handlers for council posts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use council_core::error::CoreError;
use council_core::post::{self, VoteAction};
use council_core::DbId;
use council_db::models::post::{CreatePostRequest, NewPost, VoteRequest};
use council_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Number of posts returned by the list endpoint.
const LIST_LIMIT: i64 = 20;

// ---------------------------------------------------------------------------
// GET /api/council/posts
// ---------------------------------------------------------------------------

/// List the 20 most recently created posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_recent(&state.pool, LIST_LIMIT)
        .await
        .map_err(|e| state.store_error("Error fetching posts", e))?;

    Ok(Json(DataResponse::new(posts)))
}

// ---------------------------------------------------------------------------
// POST /api/council/posts
// ---------------------------------------------------------------------------

/// Create a new council post.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let content = input.content.unwrap_or_default();
    post::validate_content(&content)?;

    let is_anonymous = input.is_anonymous.unwrap_or(false);
    let task_type = input
        .task_type
        .unwrap_or_else(|| post::DEFAULT_TASK_TYPE.to_string());
    post::validate_task_type(&task_type)?;

    let author = post::resolve_author(input.author.as_deref(), is_anonymous, state.names.as_ref());

    // Derived from the raw content; only the stored copy is trimmed.
    let hash = post::post_hash(&content, &author, Utc::now().timestamp_millis());

    let existing = PostRepo::find_by_hash(&state.pool, &hash)
        .await
        .map_err(|e| state.store_error("Error creating post", e))?;
    if existing.is_some() {
        return Err(CoreError::Conflict("Post with this hash already exists".to_string()).into());
    }

    let new_post = NewPost {
        author,
        content: content.trim().to_string(),
        is_anonymous,
        task_type,
        hash,
    };

    let saved = PostRepo::insert(&state.pool, &new_post)
        .await
        .map_err(|e| state.store_error("Error creating post", e))?;

    tracing::info!(post_id = saved.id, hash = %saved.hash, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(saved))))
}

// ---------------------------------------------------------------------------
// PUT /api/council/posts/{id}/vote
// ---------------------------------------------------------------------------

/// Increment or decrement a post's vote count. Decrement clamps at zero.
pub async fn vote_on_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    let action = VoteAction::parse(input.action.as_deref().unwrap_or_default())?;
    let id = parse_post_id(&id)?;

    let post = PostRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| state.store_error("Error updating vote", e))?
        .ok_or(CoreError::NotFound { entity: "Post" })?;

    let votes = action.apply(post.votes);

    let updated = PostRepo::set_votes(&state.pool, id, votes)
        .await
        .map_err(|e| state.store_error("Error updating vote", e))?
        .ok_or(CoreError::NotFound { entity: "Post" })?;

    tracing::info!(post_id = id, votes = updated.votes, "Vote recorded");

    Ok(Json(DataResponse::new(updated)))
}

// ---------------------------------------------------------------------------
// DELETE /api/council/posts/{id}
// ---------------------------------------------------------------------------

/// Hard-delete a post (moderation).
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_post_id(&id)?;

    let deleted = PostRepo::delete_by_id(&state.pool, id)
        .await
        .map_err(|e| state.store_error("Error deleting post", e))?
        .ok_or(CoreError::NotFound { entity: "Post" })?;

    tracing::info!(post_id = deleted.id, "Post deleted");

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// Parse a path identifier.
///
/// An identifier that does not match the key syntax cannot name any post,
/// so it is reported as NotFound rather than a 400.
fn parse_post_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::NotFound { entity: "Post" })
}
