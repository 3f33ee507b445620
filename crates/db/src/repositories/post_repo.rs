//! Repository for the `council_posts` table.

use council_core::DbId;
use sqlx::PgPool;

use crate::models::post::{CouncilPost, NewPost};

/// Column list for `council_posts` queries.
const COLUMNS: &str = "\
    id, author, content, votes, hash, is_anonymous, task_type, \
    created_at, updated_at";

/// Provides CRUD operations for council posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a resolved post, returning the full row.
    ///
    /// Votes and both timestamps come from column defaults. A duplicate
    /// hash violates `uq_council_posts_hash` and surfaces as a database
    /// error for the caller to classify.
    pub async fn insert(pool: &PgPool, input: &NewPost) -> Result<CouncilPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO council_posts (author, content, is_anonymous, task_type, hash) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(&input.author)
            .bind(&input.content)
            .bind(input.is_anonymous)
            .bind(&input.task_type)
            .bind(&input.hash)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CouncilPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM council_posts WHERE id = $1");
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its identity hash.
    pub async fn find_by_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<CouncilPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM council_posts WHERE hash = $1");
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// List the most recently created posts, newest first, truncated to
    /// `limit`.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<CouncilPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM council_posts \
             ORDER BY created_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the vote count, refreshing `updated_at`. Returns the
    /// updated row if the post still exists.
    pub async fn set_votes(
        pool: &PgPool,
        id: DbId,
        votes: i64,
    ) -> Result<Option<CouncilPost>, sqlx::Error> {
        let query = format!(
            "UPDATE council_posts SET votes = $1, updated_at = NOW() \
             WHERE id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(votes)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a post, returning the removed row if it existed.
    pub async fn delete_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CouncilPost>, sqlx::Error> {
        let query = format!("DELETE FROM council_posts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CouncilPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
