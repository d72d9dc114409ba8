//! Application state for the blog client.

use crate::api::{Article, User, PAGE_SIZE};

/// Outcome of the most recent article list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Resolved,
    Rejected,
}

/// The single application state record.
///
/// `articles` holds only the current page (or a single article on a detail
/// view) and is replaced wholesale by every fetch; it is not a cache.
/// `authorized` is derived from the user record and never set on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlogState {
    pub articles: Vec<Article>,
    pub current_page: u32,
    pub total_count: u64,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub user: User,
    pub authorized: bool,
    /// Sequence number of the most recently issued list fetch. Responses
    /// carrying an older sequence are stale and get discarded.
    pub list_seq: u64,
}

impl BlogState {
    /// Initial state: empty page one, no session.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    /// Number of pages the pagination control shows.
    ///
    /// An empty collection still shows one page.
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(PAGE_SIZE).max(1)
    }

    /// Find an article on the current page by slug.
    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }
}
