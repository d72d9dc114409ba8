//! Typed client for the blog's REST API.
//!
//! Every operation maps to exactly one HTTP call with a uniform envelope:
//! `{user}` or `{article}` on success, `{errors: ...}` on failure.

mod client;
mod error;
mod types;

pub use client::{offset_for_page, BlogClient, PAGE_SIZE};
pub use error::{ApiError, RegisterErrors};
pub use types::{Article, ArticleDraft, ArticlePage, Author, ProfileUpdate, User};
