//! Protocol Module
//!
//! Transport-independent requests and results.
//!
//! Every operation the store offers is one `Command`. The engine turns a
//! command into a `Reply` or an error; the HTTP layer only translates
//! requests into commands and replies into responses.
//!
//! ### Commands
//! - LIST   - optional `sort` + `direction`
//! - CREATE - `{title, content}`, both required
//! - UPDATE - id + `{title?, content?}`
//! - DELETE - id
//! - SEARCH - optional `title` and `content` terms, at least one non-empty
//! - PING   - liveness check

mod command;
mod response;

pub use command::{Command, CommandType, CreatePost, ListQuery, SearchQuery, UpdatePost};
pub use response::{DeleteConfirmation, Reply};
