//! Store Module
//!
//! In-memory owner of every post.
//!
//! ## Responsibilities
//! - Assign identifiers and append new posts
//! - Update and delete posts by id
//! - Enumerate posts in insertion order
//!
//! ## Data Structure Choice
//! A `Vec<Post>` wrapped in a single RwLock:
//! - Insertion order is the natural enumeration order
//! - Lookups are a linear scan; the collection is small
//! - One lock scope for the whole collection, no finer-grained locking

mod table;

pub use table::PostStore;
