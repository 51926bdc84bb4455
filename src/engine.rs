//! Engine Module
//!
//! Coordinates validation, queries and the store.
//!
//! ## Responsibilities
//! - Route commands to the right operation
//! - Validate create requests before the store is touched
//! - Resolve sort and search requests against a store snapshot
//! - Seed the store on start-up

use crate::config::Config;
use crate::error::{PostboxError, Result};
use crate::post::{self, Post, PostId};
use crate::protocol::{Command, CreatePost, ListQuery, Reply, SearchQuery, UpdatePost};
use crate::query::{SearchTerms, SortSpec};
use crate::store::PostStore;
use crate::validation::validate_create;

/// The main post engine
///
/// ## Concurrency Model
///
/// All shared state lives in `PostStore`, behind one RwLock. The engine
/// itself holds no locks, so it can be shared as `Arc<Engine>` between
/// request handlers.
///
/// Queries copy the collection under the read lock and then sort or
/// filter the copy, so no lock is held while comparing strings.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Owner of every post
    store: PostStore,
}

impl Engine {
    /// Create an engine with the given config
    ///
    /// The store starts with the example posts when `seed_posts` is set.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_posts {
            let posts = post::seed_posts();
            tracing::info!("Seeding store with {} posts", posts.len());
            PostStore::with_posts(posts)
        } else {
            PostStore::new()
        };

        Self { config, store }
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        tracing::trace!("Executing {:?}", command.command_type());

        match command {
            Command::List(query) => self.list(&query).map(Reply::Posts),
            Command::Create(payload) => self.create(&payload).map(Reply::Created),
            Command::Update { id, changes } => self.update(&id, &changes).map(Reply::Updated),
            Command::Delete { id } => self.delete(&id).map(Reply::Deleted),
            Command::Search(query) => self.search(&query).map(Reply::Posts),
            Command::Ping => Ok(Reply::Pong),
        }
    }

    /// List posts, sorted if the query asks for it
    pub fn list(&self, query: &ListQuery) -> Result<Vec<Post>> {
        let spec = SortSpec::resolve(query.sort.as_deref(), query.direction.as_deref())?;

        let mut posts = self.store.list();
        if let Some(spec) = spec {
            spec.apply(&mut posts);
        }

        Ok(posts)
    }

    /// Validate and create a post
    pub fn create(&self, payload: &CreatePost) -> Result<Post> {
        let new_post = validate_create(payload)?;
        self.store.create(&new_post.title, &new_post.content)
    }

    /// Update a post by its raw id
    ///
    /// Not validated: omitted or empty fields are left alone.
    pub fn update(&self, id: &str, changes: &UpdatePost) -> Result<Post> {
        let id = parse_id(id)?;
        self.store
            .update(&id, changes.title.as_deref(), changes.content.as_deref())
    }

    /// Delete a post by its raw id, returning the parsed id
    pub fn delete(&self, id: &str) -> Result<PostId> {
        let id = parse_id(id)?;
        self.store.delete(&id)?;
        Ok(id)
    }

    /// Search posts by title and/or content
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Post>> {
        let terms = SearchTerms::resolve(query.title.as_deref(), query.content.as_deref())?;
        terms.run(&self.store.list())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// An id that does not parse cannot name a stored post
fn parse_id(raw: &str) -> Result<PostId> {
    raw.parse()
        .map_err(|_| PostboxError::PostNotFound(raw.to_string()))
}
