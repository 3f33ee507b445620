//! Route definitions for council posts.
//!
//! Mounted at `/api/council` by `build_app_router`.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Council post routes.
///
/// ```text
/// GET    /posts            -> list_posts
/// POST   /posts            -> create_post
/// PUT    /posts/{id}/vote  -> vote_on_post
/// DELETE /posts/{id}       -> delete_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/{id}/vote", put(posts::vote_on_post))
        .route("/posts/{id}", delete(posts::delete_post))
}
