//! Command definitions
//!
//! Represents requests from clients, plus the payloads they carry.

use serde::{Deserialize, Serialize};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    List,
    Create,
    Update,
    Delete,
    Search,
    Ping,
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// List posts, optionally sorted
    List(ListQuery),

    /// Create a post
    Create(CreatePost),

    /// Update a post by id (raw path segment)
    Update { id: String, changes: UpdatePost },

    /// Delete a post by id (raw path segment)
    Delete { id: String },

    /// Keyword search
    Search(SearchQuery),

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::List(_) => CommandType::List,
            Command::Create(_) => CommandType::Create,
            Command::Update { .. } => CommandType::Update,
            Command::Delete { .. } => CommandType::Delete,
            Command::Search(_) => CommandType::Search,
            Command::Ping => CommandType::Ping,
        }
    }
}

/// Body of a create request
///
/// Both fields are optional at the type level so a missing field is
/// reported as a field error rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Body of an update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Query string of a list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, alias = "sortField")]
    pub sort: Option<String>,
    #[serde(default, alias = "sortDirection")]
    pub direction: Option<String>,
}

impl ListQuery {
    pub fn sorted(sort: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            sort: Some(sort.into()),
            direction: Some(direction.into()),
        }
    }
}

/// Query string of a search request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, alias = "titleTerm")]
    pub title: Option<String>,
    #[serde(default, alias = "contentTerm")]
    pub content: Option<String>,
}
