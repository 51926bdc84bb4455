//! Network Module
//!
//! HTTP server and request handling.
//!
//! ## Architecture
//! - axum router on a tokio runtime
//! - Handlers translate requests into `Command`s for the `Engine`
//! - `Reply` and `PostboxError` know how to become HTTP responses
//!
//! ## Routes
//! ```text
//! GET    /api/health
//! GET    /api/posts?sort=<title|content>&direction=<asc|desc>
//! POST   /api/posts                 {title, content}
//! GET    /api/posts/search?title=<term>&content=<term>
//! PUT    /api/posts/:id             {title?, content?}
//! DELETE /api/posts/:id
//! ```
//!
//! Cross-origin requests are allowed from any origin.

mod server;
mod routes;
mod response;

pub use server::Server;
pub use routes::router;
