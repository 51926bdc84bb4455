//! Search Resolution Tests
//!
//! Tests verify:
//! - At least one non-empty term is required
//! - Case-insensitive substring matching
//! - Posts matching both terms are returned twice
//! - No matches is an error

use postbox::error::PostboxError;
use postbox::post::{seed_posts, Post, PostId};
use postbox::query::SearchTerms;

// =============================================================================
// Helper Functions
// =============================================================================

fn post(title: &str, content: &str) -> Post {
    Post {
        id: PostId::generate(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_resolve_requires_a_term() {
    assert!(matches!(
        SearchTerms::resolve(None, None),
        Err(PostboxError::MissingQuery)
    ));
    assert!(matches!(
        SearchTerms::resolve(Some(""), Some("")),
        Err(PostboxError::MissingQuery)
    ));
    assert!(matches!(
        SearchTerms::resolve(Some(""), None),
        Err(PostboxError::MissingQuery)
    ));
}

#[test]
fn test_resolve_lowercases_terms() {
    let terms = SearchTerms::resolve(Some("FiRsT"), Some("")).unwrap();

    assert_eq!(terms.title(), Some("first"));
    assert_eq!(terms.content(), None);
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test]
fn test_title_match_is_case_insensitive() {
    let posts = seed_posts();
    let terms = SearchTerms::resolve(Some("first"), Some("")).unwrap();

    let results = terms.run(&posts).unwrap();

    assert_eq!(results, vec![posts[0].clone()]);
}

#[test]
fn test_content_match() {
    let posts = seed_posts();
    let terms = SearchTerms::resolve(None, Some("SECOND POST")).unwrap();

    let results = terms.run(&posts).unwrap();

    assert_eq!(results, vec![posts[1].clone()]);
}

#[test]
fn test_double_match_returns_post_twice() {
    let posts = seed_posts();
    let terms = SearchTerms::resolve(Some("first"), Some("first")).unwrap();

    let results = terms.run(&posts).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], posts[0]);
    assert_eq!(results[1], posts[0]);
}

#[test]
fn test_results_follow_store_order_per_post() {
    // Per post: title clause first, then content clause
    let posts = vec![
        post("rust news", "nothing here"),
        post("other", "about rust"),
        post("rust again", "more rust"),
    ];
    let terms = SearchTerms::resolve(Some("rust"), Some("rust")).unwrap();

    let results = terms.run(&posts).unwrap();

    let titles: Vec<&str> = results.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["rust news", "other", "rust again", "rust again"]);
}

#[test]
fn test_either_term_can_match() {
    let posts = seed_posts();
    let terms = SearchTerms::resolve(Some("second"), Some("first post.")).unwrap();

    let results = terms.run(&posts).unwrap();

    let titles: Vec<&str> = results.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First post", "Second post"]);
}

#[test]
fn test_no_matches() {
    let posts = seed_posts();
    let terms = SearchTerms::resolve(Some("zebra"), None).unwrap();

    let err = terms.run(&posts).unwrap_err();

    assert!(matches!(err, PostboxError::NoMatches));
    assert!(err.is_not_found());
}

#[test]
fn test_empty_store_has_no_matches() {
    let terms = SearchTerms::resolve(Some("post"), None).unwrap();

    assert!(matches!(terms.run(&[]), Err(PostboxError::NoMatches)));
}
