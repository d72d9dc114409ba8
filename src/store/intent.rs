//! Intents dispatched to the blog state reducer.
//!
//! One variant per transition: UI events (`PageChanged`) and completions of
//! API calls, success or failure. Payloads are whatever the corresponding
//! API operation resolved with.

use crate::api::{Article, User};

#[derive(Debug, Clone, PartialEq)]
pub enum BlogIntent {
    /// User navigated to a page of the article list.
    PageChanged { page: u32 },

    /// A list fetch was issued. `seq` is the store's fetch counter at the
    /// time of issue; later responses carry it back.
    ListStarted { seq: u64 },

    /// A list fetch resolved.
    ListSucceeded {
        seq: u64,
        articles: Vec<Article>,
        total_count: u64,
    },

    /// A list fetch rejected.
    ListFailed { seq: u64, message: String },

    /// A single-article fetch resolved; replaces the whole collection.
    ArticleLoaded { article: Article },

    /// Login, registration, profile fetch, or profile update resolved.
    UserAuthenticated { user: User },

    /// Session ended.
    LoggedOut,

    /// A newly published article; goes to the front of the collection.
    ArticleCreated { article: Article },

    /// An edited article; replaces the matching slug in place.
    ArticleEdited { article: Article },

    /// The server confirmed a deletion (echoing the article).
    ArticleDeleted { article: Article },

    /// Favorite or unfavorite resolved; replaces the matching slug.
    LikeToggled { article: Article },

    /// Any other API call rejected; records the message for display.
    OperationFailed { message: String },
}
