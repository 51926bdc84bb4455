//! # Postbox
//!
//! A small in-memory post store with:
//! - Create, list, update and delete over HTTP
//! - Optional sorting by title or content
//! - Case-insensitive keyword search
//! - One RwLock around the whole collection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP Server (axum)                       │
//! │                 (Browser clients, any origin)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Engine                               │
//! │                  (routes commands)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          │            │            │
//!          ▼            ▼            ▼
//!   ┌────────────┐ ┌──────────┐ ┌──────────┐
//!   │ Validation │ │  Query   │ │  Store   │
//!   │  (create)  │ │(sort/    │ │ (RwLock) │
//!   │            │ │ search)  │ │          │
//!   └────────────┘ └──────────┘ └──────────┘
//! ```
//!
//! State is never persisted; a restart starts over from the seed posts.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod post;
pub mod store;
pub mod validation;
pub mod query;
pub mod network;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PostboxError, Result};
pub use config::Config;
pub use engine::Engine;
pub use post::{Post, PostId};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Postbox
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
