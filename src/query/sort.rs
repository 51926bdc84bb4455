//! Sort resolution
//!
//! Turns the raw `sort`/`direction` query values into a `SortSpec`.

use std::str::FromStr;

use crate::error::{PostboxError, Result};
use crate::post::Post;

/// Field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    /// Every value accepted for the `sort` parameter
    pub const ACCEPTED: &'static [&'static str] = &["title", "content"];

    fn key<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(()),
        }
    }
}

/// Ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Every value accepted for the `direction` parameter
    pub const ACCEPTED: &'static [&'static str] = &["asc", "desc"];
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// A fully resolved sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Resolve raw query values
    ///
    /// Returns `Ok(None)` when both are absent (keep insertion order).
    /// Case matters: `Title` or `ASC` are rejected.
    pub fn resolve(field: Option<&str>, direction: Option<&str>) -> Result<Option<SortSpec>> {
        match (field, direction) {
            (None, None) => Ok(None),
            (Some(f), Some(d)) => match (f.parse::<SortField>(), d.parse::<SortDirection>()) {
                (Ok(field), Ok(direction)) => Ok(Some(SortSpec { field, direction })),
                _ => Err(invalid_query(format!(
                    "unsupported sort {:?} / direction {:?}",
                    f, d
                ))),
            },
            (Some(_), None) | (None, Some(_)) => Err(invalid_query(
                "sort and direction must be supplied together".to_string(),
            )),
        }
    }

    /// Order `posts` in place
    ///
    /// Ascending is a stable byte-wise comparison of the field text, so
    /// equal keys stay in insertion order. Descending is exactly the
    /// ascending sequence reversed.
    pub fn apply(&self, posts: &mut [Post]) {
        let field = self.field;
        posts.sort_by(|a, b| field.key(a).cmp(field.key(b)));

        if self.direction == SortDirection::Desc {
            posts.reverse();
        }
    }
}

/// `InvalidQuery` carrying the accepted values of both parameters
pub(crate) fn invalid_query(message: String) -> PostboxError {
    PostboxError::InvalidQuery {
        message,
        accepted_fields: SortField::ACCEPTED,
        accepted_directions: SortDirection::ACCEPTED,
    }
}
