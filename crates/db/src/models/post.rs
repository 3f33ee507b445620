//! Council post entity model and DTOs.

use council_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `council_posts` table.
///
/// Serialized with camelCase keys to match the public API contract.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouncilPost {
    pub id: DbId,
    pub author: String,
    pub content: String,
    pub votes: i64,
    pub hash: String,
    pub is_anonymous: bool,
    pub task_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /api/council/posts`.
///
/// Every field is optional at the wire level; the handler resolves defaults
/// and reports missing content as a validation failure rather than a
/// deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub author: Option<String>,
    pub is_anonymous: Option<bool>,
    pub task_type: Option<String>,
}

/// Body of `PUT /api/council/posts/{id}/vote`.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub action: Option<String>,
}

/// Fully resolved input for `PostRepo::insert`.
///
/// Produced by the create handler after validation, author resolution, and
/// hash derivation. Votes and timestamps come from column defaults.
#[derive(Debug)]
pub struct NewPost {
    pub author: String,
    pub content: String,
    pub is_anonymous: bool,
    pub task_type: String,
    pub hash: String,
}
