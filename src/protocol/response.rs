//! Reply definitions
//!
//! Represents the successful result of a command.

use serde::Serialize;

use crate::post::{Post, PostId};

/// The result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// LIST / SEARCH result (search may repeat a post)
    Posts(Vec<Post>),

    /// CREATE result
    Created(Post),

    /// UPDATE result
    Updated(Post),

    /// DELETE confirmation
    Deleted(PostId),

    /// PING answer
    Pong,
}

/// Body sent back for a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Reply {
    /// Confirmation message for a deleted post
    pub fn deleted_message(id: &PostId) -> DeleteConfirmation {
        DeleteConfirmation {
            message: format!("Post with id {} has been deleted successfully.", id),
        }
    }
}
