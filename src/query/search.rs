//! Search resolution
//!
//! Case-insensitive substring search over titles and contents.

use crate::error::{PostboxError, Result};
use crate::post::Post;

/// Lower-cased, non-empty search terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    title: Option<String>,
    content: Option<String>,
}

impl SearchTerms {
    /// Resolve raw query values
    ///
    /// An absent term and an empty term mean the same thing: that field is
    /// not searched. Fails with `MissingQuery` if neither field is searched.
    pub fn resolve(title: Option<&str>, content: Option<&str>) -> Result<SearchTerms> {
        let title = normalize(title);
        let content = normalize(content);

        if title.is_none() && content.is_none() {
            return Err(PostboxError::MissingQuery);
        }

        Ok(SearchTerms { title, content })
    }

    /// Lower-cased title term, if searching titles
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Lower-cased content term, if searching contents
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Collect matches in store order
    ///
    /// For each post the title clause is checked, then the content clause,
    /// and the post is pushed once per clause it satisfies. A post matching
    /// both therefore appears twice, back to back.
    pub fn run(&self, posts: &[Post]) -> Result<Vec<Post>> {
        let mut matches = Vec::new();

        for post in posts {
            if let Some(term) = &self.title {
                if post.title.to_lowercase().contains(term.as_str()) {
                    matches.push(post.clone());
                }
            }
            if let Some(term) = &self.content {
                if post.content.to_lowercase().contains(term.as_str()) {
                    matches.push(post.clone());
                }
            }
        }

        if matches.is_empty() {
            return Err(PostboxError::NoMatches);
        }

        Ok(matches)
    }
}

fn normalize(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.is_empty()).map(str::to_lowercase)
}
