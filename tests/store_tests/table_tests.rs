//! PostStore Tests
//!
//! Tests verify:
//! - Create assigns fresh ids and appends
//! - Empty fields are rejected on create
//! - Update overwrites only supplied, non-empty fields
//! - Delete removes by id and fails on unknown ids
//! - Insertion order is preserved
//! - Concurrent access patterns

use std::sync::Arc;
use std::thread;

use postbox::error::PostboxError;
use postbox::post::{seed_posts, PostId};
use postbox::store::PostStore;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = PostStore::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn test_create_and_get() {
    let store = PostStore::new();

    let post = store.create("Hello", "World").unwrap();

    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "World");
    assert_eq!(store.get(&post.id), Some(post));
}

#[test]
fn test_create_assigns_id_not_present_before() {
    let store = PostStore::with_posts(seed_posts());
    let before: Vec<PostId> = store.list().iter().map(|p| p.id).collect();

    let post = store.create("Third", "Body").unwrap();

    assert!(!before.contains(&post.id));
    assert!(store.contains(&post.id));
}

#[test]
fn test_create_assigns_unique_ids() {
    let store = PostStore::new();

    for i in 0..200 {
        store.create(&format!("title{}", i), "content").unwrap();
    }

    let mut ids: Vec<PostId> = store.list().iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_list_preserves_insertion_order() {
    let store = PostStore::new();

    store.create("b", "1").unwrap();
    store.create("a", "2").unwrap();
    store.create("c", "3").unwrap();

    let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["b", "a", "c"]);
}

#[test]
fn test_with_posts_keeps_order_and_drops_duplicates() {
    let mut posts = seed_posts();
    posts.push(posts[0].clone());

    let store = PostStore::with_posts(posts);

    let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["First post", "Second post"]);
}

// =============================================================================
// Create Validation Tests
// =============================================================================

#[test]
fn test_create_rejects_empty_title() {
    let store = PostStore::new();

    let err = store.create("", "content").unwrap_err();

    match err {
        PostboxError::FieldErrors(fields) => {
            assert_eq!(fields.len(), 1);
            assert!(fields.get("title").is_some());
        }
        other => panic!("Expected FieldErrors, got {:?}", other),
    }
    assert!(store.is_empty());
}

#[test]
fn test_create_rejects_both_empty() {
    let store = PostStore::new();

    let err = store.create("", "").unwrap_err();

    match err {
        PostboxError::FieldErrors(fields) => {
            assert!(fields.get("title").is_some());
            assert!(fields.get("content").is_some());
        }
        other => panic!("Expected FieldErrors, got {:?}", other),
    }
    assert!(store.is_empty());
}

#[test]
fn test_create_accepts_whitespace() {
    let store = PostStore::new();

    let post = store.create(" ", "\t").unwrap();

    assert_eq!(post.title, " ");
    assert_eq!(post.content, "\t");
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_title_only() {
    let store = PostStore::new();
    let post = store.create("Old", "Body").unwrap();

    let updated = store.update(&post.id, Some("New"), None).unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "Body");
    assert_eq!(store.get(&post.id), Some(updated));
}

#[test]
fn test_update_ignores_empty_values() {
    let store = PostStore::new();
    let post = store.create("Title", "Body").unwrap();

    let updated = store.update(&post.id, Some(""), Some("New body")).unwrap();

    assert_eq!(updated.title, "Title");
    assert_eq!(updated.content, "New body");
}

#[test]
fn test_update_with_nothing_is_noop() {
    let store = PostStore::new();
    let post = store.create("Title", "Body").unwrap();

    let updated = store.update(&post.id, None, None).unwrap();

    assert_eq!(updated, post);
}

#[test]
fn test_update_keeps_position() {
    let store = PostStore::new();
    store.create("a", "1").unwrap();
    let middle = store.create("b", "2").unwrap();
    store.create("c", "3").unwrap();

    store.update(&middle.id, Some("B"), None).unwrap();

    let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["a", "B", "c"]);
}

#[test]
fn test_update_unknown_id() {
    let store = PostStore::with_posts(seed_posts());

    let err = store.update(&PostId::generate(), Some("x"), None).unwrap_err();

    assert!(matches!(err, PostboxError::PostNotFound(_)));
    assert!(err.is_not_found());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_post() {
    let store = PostStore::with_posts(seed_posts());
    let first = store.list()[0].clone();

    store.delete(&first.id).unwrap();

    assert_eq!(store.len(), 1);
    assert!(!store.contains(&first.id));
    assert_eq!(store.list()[0].title, "Second post");
}

#[test]
fn test_delete_twice_fails() {
    let store = PostStore::new();
    let post = store.create("Title", "Body").unwrap();

    store.delete(&post.id).unwrap();
    let err = store.delete(&post.id).unwrap_err();

    assert!(matches!(err, PostboxError::PostNotFound(_)));
}

#[test]
fn test_delete_unknown_id() {
    let store = PostStore::with_posts(seed_posts());

    let err = store.delete(&PostId::generate()).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_creates() {
    let store = Arc::new(PostStore::new());

    let mut handles = vec![];
    for t in 0..4 {
        let store_clone = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                store_clone
                    .create(&format!("thread{}_title{}", t, i), "content")
                    .unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 100);
}

#[test]
fn test_concurrent_readers_and_writer() {
    let store = Arc::new(PostStore::with_posts(seed_posts()));

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..50 {
                let post = store.create(&format!("title{}", i), "content").unwrap();
                store.update(&post.id, None, Some("changed")).unwrap();
            }
        })
    };

    let mut readers = vec![];
    for _ in 0..4 {
        let store = Arc::clone(&store);
        readers.push(thread::spawn(move || {
            for _ in 0..50 {
                let posts = store.list();
                // Seed posts stay first, and no post is ever half-written
                assert_eq!(posts[0].title, "First post");
                assert!(posts.iter().all(|p| !p.title.is_empty() && !p.content.is_empty()));
            }
        }));
    }

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.len(), 52);
}
