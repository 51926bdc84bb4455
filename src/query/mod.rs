//! Query Module
//!
//! Read-only sort and search resolution over a snapshot of the store.
//!
//! ## Sort
//! `sort` and `direction` must be given together or not at all:
//! - neither → insertion order
//! - `title|content` + `asc|desc` → ordered by that field
//! - anything else → `InvalidQuery`
//!
//! ## Search
//! Case-insensitive substring match on `title` and/or `content`.
//! A post matching both terms is returned twice.

mod sort;
mod search;

pub use sort::{SortDirection, SortField, SortSpec};
pub(crate) use sort::invalid_query;
pub use search::SearchTerms;
