//! Post Module
//!
//! The single record type held by the store.
//!
//! ## Responsibilities
//! - Define the `Post` record and its identifier
//! - Provide the example posts the server starts with
//!
//! Only the store creates or changes stored posts. Everything handed out
//! of the store is a clone, ready to be serialized.

mod id;

pub use id::PostId;

use serde::{Deserialize, Serialize};

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned at creation, never changes
    pub id: PostId,

    /// Non-empty title
    pub title: String,

    /// Non-empty body text
    pub content: String,
}

impl Post {
    pub(crate) fn new(id: PostId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The two posts a fresh server starts with
///
/// Each call draws new ids, like any other create.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(PostId::generate(), "First post", "This is the first post."),
        Post::new(PostId::generate(), "Second post", "This is the second post."),
    ]
}
