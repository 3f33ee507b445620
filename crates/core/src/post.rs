//! Council post domain rules.
//!
//! Task type constants, content validation, vote arithmetic, author
//! resolution, and the short identity hash shown to users for sharing posts.

use crate::error::CoreError;
use crate::naming::NameGenerator;

// ---------------------------------------------------------------------------
// Task types
// ---------------------------------------------------------------------------

pub const TASK_REPAIR: &str = "repair";
pub const TASK_REPLACE: &str = "replace";
pub const TASK_PRIVACY: &str = "privacy";
pub const TASK_LEARN: &str = "learn";
pub const TASK_GENERAL: &str = "general";

/// All valid task types.
pub const VALID_TASK_TYPES: &[&str] = &[
    TASK_REPAIR,
    TASK_REPLACE,
    TASK_PRIVACY,
    TASK_LEARN,
    TASK_GENERAL,
];

/// Task type applied when a post does not name one.
pub const DEFAULT_TASK_TYPE: &str = TASK_GENERAL;

/// Validate that a task type string is one of the known types.
pub fn validate_task_type(task_type: &str) -> Result<(), CoreError> {
    if VALID_TASK_TYPES.contains(&task_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task type '{}'. Must be one of: {:?}",
            task_type, VALID_TASK_TYPES
        )))
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Maximum post content length, in characters.
pub const MAX_CONTENT_LENGTH: usize = 500;

/// Validate post content: required and non-empty after trimming, then at
/// most [`MAX_CONTENT_LENGTH`] characters. Checked in that order.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content is required".to_string()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Content must be less than {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

pub const ACTION_INCREMENT: &str = "increment";
pub const ACTION_DECREMENT: &str = "decrement";

/// A parsed vote action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Increment,
    Decrement,
}

impl VoteAction {
    /// Parse a wire-level action string.
    pub fn parse(action: &str) -> Result<Self, CoreError> {
        match action {
            ACTION_INCREMENT => Ok(Self::Increment),
            ACTION_DECREMENT => Ok(Self::Decrement),
            _ => Err(CoreError::Validation(format!(
                "Action must be \"{ACTION_INCREMENT}\" or \"{ACTION_DECREMENT}\""
            ))),
        }
    }

    /// Apply the action to a vote count. Decrement clamps at zero.
    pub fn apply(self, votes: i64) -> i64 {
        match self {
            Self::Increment => votes.saturating_add(1),
            Self::Decrement => (votes - 1).max(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

/// Author shown on anonymous posts.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Resolve the final author of a post.
///
/// Anonymity wins over any supplied author. A missing or whitespace-only
/// author falls back to a generated guest name.
pub fn resolve_author(
    author: Option<&str>,
    is_anonymous: bool,
    names: &dyn NameGenerator,
) -> String {
    if is_anonymous {
        return ANONYMOUS_AUTHOR.to_string();
    }
    match author {
        Some(a) if !a.trim().is_empty() => a.to_string(),
        _ => names.guest_name(),
    }
}

// ---------------------------------------------------------------------------
// Identity hash
// ---------------------------------------------------------------------------

/// Compute the short identity hash of a post.
///
/// Joins content, author, and the creation instant (millisecond precision)
/// with underscores, then folds `h = h * 31 + code_unit` over the UTF-16
/// code units of the joined string with 32-bit signed wraparound. The
/// absolute value is rendered as uppercase hex, zero-padded to 8 characters
/// (the magnitude of an `i32` never needs more than 8 hex digits).
///
/// Not cryptographic; this is a human-shareable post identifier.
pub fn post_hash(content: &str, author: &str, at_millis: i64) -> String {
    let input = format!("{content}_{author}_{at_millis}");
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    format!("{:08X}", i64::from(acc).abs())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
