//! PostStore implementation
//!
//! Vec-backed table with a parking_lot RwLock for concurrency.

use parking_lot::RwLock;

use crate::error::{PostboxError, Result};
use crate::post::{Post, PostId};
use crate::validation::{required_field, FieldErrors};

/// In-memory table of posts
///
/// ## Concurrency:
/// - `posts`: Protected by RwLock (many concurrent readers, exclusive writer)
/// - Writers (`create`/`update`/`delete`) exclude each other and all readers
/// - All methods use `&self` (no exclusive access needed)
pub struct PostStore {
    /// Posts in insertion order
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Create a store holding `posts`, kept in the given order
    ///
    /// Later duplicates of an id already present are dropped.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let mut unique: Vec<Post> = Vec::with_capacity(posts.len());
        for post in posts {
            if unique.iter().any(|p| p.id == post.id) {
                tracing::warn!("Dropping duplicate post id {}", post.id);
                continue;
            }
            unique.push(post);
        }

        Self {
            posts: RwLock::new(unique),
        }
    }

    /// All posts in insertion order (read lock)
    pub fn list(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    /// Get a post by id (read lock)
    pub fn get(&self, id: &PostId) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == *id).cloned()
    }

    /// Check whether a post with `id` exists (read lock)
    pub fn contains(&self, id: &PostId) -> bool {
        self.posts.read().iter().any(|p| p.id == *id)
    }

    /// Append a new post (write lock)
    ///
    /// Rejects empty `title`/`content` even though the engine validates
    /// first. The id is drawn while holding the write lock, so it cannot
    /// race with another create.
    pub fn create(&self, title: &str, content: &str) -> Result<Post> {
        let mut errors = FieldErrors::new();
        let title = required_field(&mut errors, "title", Some(title));
        let content = required_field(&mut errors, "content", Some(content));
        errors.into_result()?;

        let mut posts = self.posts.write();

        let id = loop {
            let candidate = PostId::generate();
            if !posts.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let post = Post::new(id, title.unwrap_or_default(), content.unwrap_or_default());
        posts.push(post.clone());

        tracing::debug!(id = %post.id, count = posts.len(), "Created post");
        Ok(post)
    }

    /// Overwrite the supplied, non-empty fields of a post (write lock)
    ///
    /// `None` and `Some("")` both leave the field as it is.
    pub fn update(&self, id: &PostId, title: Option<&str>, content: Option<&str>) -> Result<Post> {
        let mut posts = self.posts.write();

        let post = posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| PostboxError::PostNotFound(id.to_string()))?;

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            post.title = title.to_string();
        }
        if let Some(content) = content.filter(|c| !c.is_empty()) {
            post.content = content.to_string();
        }

        tracing::debug!(id = %post.id, "Updated post");
        Ok(post.clone())
    }

    /// Remove a post (write lock)
    pub fn delete(&self, id: &PostId) -> Result<()> {
        let mut posts = self.posts.write();

        let index = posts
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| PostboxError::PostNotFound(id.to_string()))?;

        // remove (not swap_remove) keeps insertion order
        posts.remove(index);

        tracing::debug!(id = %id, count = posts.len(), "Deleted post");
        Ok(())
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    /// Check if the store holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
