//! State transitions for the blog client.

use super::intent::BlogIntent;
use super::state::{BlogState, FetchStatus};

/// Reducer transforms state based on intents.
///
/// Must be a pure, total function: no intent may fail, malformed payloads
/// are the API client's concern. All side effects (network, session file)
/// happen before the dispatch.
pub trait Reducer {
    type State;
    type Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer for [`BlogState`].
pub struct BlogReducer;

impl Reducer for BlogReducer {
    type State = BlogState;
    type Intent = BlogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BlogIntent::PageChanged { page } => BlogState {
                current_page: page.max(1),
                ..state
            },

            BlogIntent::ListStarted { seq } => BlogState {
                status: FetchStatus::Loading,
                error: None,
                list_seq: seq.max(state.list_seq),
                ..state
            },

            BlogIntent::ListSucceeded {
                seq,
                articles,
                total_count,
            } => {
                if seq < state.list_seq {
                    // A newer fetch was issued after this one; its response
                    // wins even if it arrived earlier.
                    tracing::debug!(seq, latest = state.list_seq, "Stale list response discarded");
                    return state;
                }
                BlogState {
                    status: FetchStatus::Resolved,
                    articles,
                    total_count,
                    ..state
                }
            }

            BlogIntent::ListFailed { seq, message } => {
                if seq < state.list_seq {
                    tracing::debug!(seq, latest = state.list_seq, "Stale list failure discarded");
                    return state;
                }
                BlogState {
                    status: FetchStatus::Rejected,
                    error: Some(message),
                    ..state
                }
            }

            BlogIntent::ArticleLoaded { article } => BlogState {
                articles: vec![article],
                ..state
            },

            BlogIntent::UserAuthenticated { user } => {
                let authorized = !user.username.is_empty();
                BlogState {
                    user,
                    authorized,
                    ..state
                }
            }

            BlogIntent::LoggedOut => BlogState {
                user: Default::default(),
                authorized: false,
                ..state
            },

            BlogIntent::ArticleCreated { article } => {
                let mut articles = state.articles;
                articles.insert(0, article);
                BlogState { articles, ..state }
            }

            BlogIntent::ArticleEdited { article } | BlogIntent::LikeToggled { article } => {
                let mut articles = state.articles;
                if let Some(existing) = articles.iter_mut().find(|a| a.slug == article.slug) {
                    *existing = article;
                }
                BlogState { articles, ..state }
            }

            BlogIntent::ArticleDeleted { article } => {
                let mut articles = state.articles;
                articles.retain(|a| a.slug != article.slug);
                BlogState { articles, ..state }
            }

            BlogIntent::OperationFailed { message } => BlogState {
                error: Some(message),
                ..state
            },
        }
    }
}
