//! Shared handle to the application state.
//!
//! The store is owned by the composition root and passed where needed;
//! there is no global singleton. Reads clone the state out, writes go
//! through `dispatch` which applies the reducer under an exclusive lock,
//! so every transition is atomic with respect to the others.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::intent::BlogIntent;
use super::reducer::{BlogReducer, Reducer};
use super::state::BlogState;

/// Thread-safe container for [`BlogState`].
#[derive(Clone)]
pub struct BlogStore {
    inner: Arc<RwLock<BlogState>>,
    /// Counter behind the list-fetch sequence numbers. Lives outside the
    /// state so issuing a fetch does not need the write lock twice.
    list_fetches: Arc<AtomicU64>,
}

impl BlogStore {
    /// Create a store with the initial empty state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BlogState::new())),
            list_fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> BlogState {
        self.inner.read().expect("blog state lock poisoned").clone()
    }

    /// Apply an intent to the state.
    pub fn dispatch(&self, intent: BlogIntent) {
        let mut guard = self.inner.write().expect("blog state lock poisoned");
        let next = BlogReducer::reduce(guard.clone(), intent);
        *guard = next;
    }

    /// Issue a new list fetch: bumps the sequence counter and dispatches
    /// `ListStarted`. The caller passes the returned sequence back with the
    /// fetch's completion intent so stale responses can be told apart.
    pub fn begin_list_fetch(&self) -> u64 {
        let seq = self.list_fetches.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(BlogIntent::ListStarted { seq });
        seq
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Article;
    use crate::store::state::FetchStatus;

    fn article(slug: &str) -> Article {
        Article {
            slug: slug.to_string(),
            ..Article::default()
        }
    }

    #[test]
    fn begin_list_fetch_issues_increasing_sequences() {
        let store = BlogStore::new();
        assert_eq!(store.begin_list_fetch(), 1);
        assert_eq!(store.begin_list_fetch(), 2);
        assert_eq!(store.state().status, FetchStatus::Loading);
        assert_eq!(store.state().list_seq, 2);
    }

    #[test]
    fn page_navigation_then_fetch() {
        let store = BlogStore::new();
        store.dispatch(BlogIntent::PageChanged { page: 2 });
        let seq = store.begin_list_fetch();
        store.dispatch(BlogIntent::ListSucceeded {
            seq,
            articles: vec![article("a")],
            total_count: 30,
        });

        let state = store.state();
        assert_eq!(state.current_page, 2);
        assert!(state.articles.len() <= 20);
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn superseded_fetch_cannot_overwrite() {
        let store = BlogStore::new();
        let first = store.begin_list_fetch();
        let second = store.begin_list_fetch();

        // Second fetch's response lands first.
        store.dispatch(BlogIntent::ListSucceeded {
            seq: second,
            articles: vec![article("page-two")],
            total_count: 40,
        });
        // First fetch straggles in afterwards and is dropped.
        store.dispatch(BlogIntent::ListSucceeded {
            seq: first,
            articles: vec![article("page-one")],
            total_count: 40,
        });

        assert_eq!(store.state().articles[0].slug, "page-two");
    }

    #[test]
    fn clones_share_state() {
        let store = BlogStore::new();
        let other = store.clone();
        store.dispatch(BlogIntent::PageChanged { page: 7 });
        assert_eq!(other.state().current_page, 7);
    }
}
