//! HTTP client for the blog API.
//!
//! Each operation is exactly one round trip: no retry, no timeout, no
//! backoff. A non-2xx status is always a failure regardless of body
//! content; the parsed `errors` field becomes the failure message.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::session::Token;

use super::error::{ApiError, ErrorsBody, RegisterErrors};
use super::types::{Article, ArticleDraft, ArticleEnvelope, ArticlePage, ProfileUpdate, User, UserEnvelope};

/// Fixed page size for article listings.
pub const PAGE_SIZE: u64 = 20;

/// Offset query value for a 1-based page number.
pub fn offset_for_page(page: u32) -> u64 {
    PAGE_SIZE * u64::from(page.max(1) - 1)
}

/// Client for a Conduit-style blog API.
pub struct BlogClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlogClient {
    /// Create a client for the given base URL.
    ///
    /// A trailing slash on the base URL is optional.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Start a request, attaching the auth header when a token is present.
    fn request(&self, method: Method, path: &str, token: Option<&Token>) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Token {}", token.expose()));
        }
        builder
    }

    /// List one page of articles.
    pub async fn list_articles(
        &self,
        offset: u64,
        token: Option<&Token>,
    ) -> Result<ArticlePage, ApiError> {
        let path = format!("articles?offset={}", offset);
        let response = self.request(Method::GET, &path, token).send().await?;
        let page: ArticlePage = decode(response).await?;
        tracing::debug!(
            offset,
            count = page.articles.len(),
            total = page.articles_count,
            "Article page fetched"
        );
        Ok(page)
    }

    /// Fetch a single article by slug.
    pub async fn get_article(&self, slug: &str, token: Option<&Token>) -> Result<Article, ApiError> {
        let path = format!("articles/{}", slug);
        let response = self.request(Method::GET, &path, token).send().await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        Ok(envelope.article)
    }

    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = json!({"user": {"email": email, "password": password}});
        let response = self
            .request(Method::POST, "users/login", None)
            .json(&body)
            .send()
            .await?;
        let envelope: UserEnvelope = decode(response).await?;
        tracing::info!(username = %envelope.user.username, "Logged in");
        Ok(envelope.user)
    }

    /// Register a new account.
    ///
    /// Conflicts come back as `ApiError::Registration` with per-field
    /// messages instead of a flat `Rejected`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = json!({"user": {"username": username, "email": email, "password": password}});
        let response = self
            .request(Method::POST, "users", None)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            if let Ok(ErrorsBody { errors }) = serde_json::from_slice::<ErrorsBody>(&bytes) {
                if let Ok(fields) = serde_json::from_value::<RegisterErrors>(errors.clone()) {
                    if !fields.is_empty() {
                        return Err(ApiError::Registration(fields));
                    }
                }
                return Err(ApiError::Rejected {
                    status: status.as_u16(),
                    message: ErrorsBody { errors }.message(),
                });
            }
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: "unknown error".to_string(),
            });
        }

        let envelope: UserEnvelope = serde_json::from_slice(&bytes)?;
        tracing::info!(username = %envelope.user.username, "Registered");
        Ok(envelope.user)
    }

    /// Fetch the profile for the current session.
    pub async fn current_user(&self, token: &Token) -> Result<User, ApiError> {
        let response = self.request(Method::GET, "user", Some(token)).send().await?;
        let envelope: UserEnvelope = decode(response).await?;
        Ok(envelope.user)
    }

    /// Update the current user's profile. Only set fields are sent.
    pub async fn update_user(
        &self,
        token: &Token,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        let body = json!({"user": update});
        let response = self
            .request(Method::PUT, "user", Some(token))
            .json(&body)
            .send()
            .await?;
        let envelope: UserEnvelope = decode(response).await?;
        Ok(envelope.user)
    }

    /// Publish a new article.
    pub async fn create_article(
        &self,
        token: &Token,
        draft: &ArticleDraft,
    ) -> Result<Article, ApiError> {
        let body = json!({"article": draft});
        let response = self
            .request(Method::POST, "articles", Some(token))
            .json(&body)
            .send()
            .await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        tracing::info!(slug = %envelope.article.slug, "Article created");
        Ok(envelope.article)
    }

    /// Replace an existing article's content.
    pub async fn edit_article(
        &self,
        token: &Token,
        slug: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, ApiError> {
        let path = format!("articles/{}", slug);
        let body = json!({"article": draft});
        let response = self
            .request(Method::PUT, &path, Some(token))
            .json(&body)
            .send()
            .await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        Ok(envelope.article)
    }

    /// Delete an article. The server echoes the deleted article back.
    pub async fn delete_article(&self, token: &Token, slug: &str) -> Result<Article, ApiError> {
        let path = format!("articles/{}", slug);
        let response = self.request(Method::DELETE, &path, Some(token)).send().await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        tracing::info!(slug = %slug, "Article deleted");
        Ok(envelope.article)
    }

    /// Mark an article as favorited.
    pub async fn favorite(&self, token: &Token, slug: &str) -> Result<Article, ApiError> {
        let path = format!("articles/{}/favorite", slug);
        let response = self.request(Method::POST, &path, Some(token)).send().await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        Ok(envelope.article)
    }

    /// Remove an article from favorites.
    pub async fn unfavorite(&self, token: &Token, slug: &str) -> Result<Article, ApiError> {
        let path = format!("articles/{}/favorite", slug);
        let response = self.request(Method::DELETE, &path, Some(token)).send().await?;
        let envelope: ArticleEnvelope = decode(response).await?;
        Ok(envelope.article)
    }
}

/// Decode a success body, or turn a non-2xx response into a failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorsBody>(&bytes)
            .map(|body| body.message())
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(status = status.as_u16(), %message, "Request rejected");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
