//! Validation Module
//!
//! Field checks applied to create requests before the store is touched.
//!
//! ## Rules
//! - `title` and `content` must both be present and not exactly `""`
//! - No trimming: `" "` is a valid title
//! - Every failing field is reported, not just the first one
//!
//! Update requests do not pass through here. An update ignores omitted or
//! empty fields instead of rejecting them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::protocol::CreatePost;

/// Field name → message for every field that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Message recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failures in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing failed, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// A create request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Check a create payload
pub fn validate_create(payload: &CreatePost) -> Result<NewPost, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = required_field(&mut errors, "title", payload.title.as_deref());
    let content = required_field(&mut errors, "content", payload.content.as_deref());

    errors.into_result()?;

    Ok(NewPost {
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
    })
}

/// Check that a single value is present and non-empty
///
/// Used by the store as well, so an empty value can never be written even
/// if a caller skips `validate_create`.
pub(crate) fn required_field(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        Some(_) => {
            errors.add(field, format!("{} must not be empty", capitalize(field)));
            None
        }
        None => {
            errors.add(field, format!("{} is mandatory", capitalize(field)));
            None
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
