//! Wire types for the blog API.
//!
//! Field names follow the JSON the server emits; timestamps are kept as the
//! ISO-8601 strings they arrive as (the client never does date arithmetic).

use serde::{Deserialize, Serialize};

/// Summary of an article's author as embedded in article responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub following: bool,
}

/// A single article. Identity is the slug.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Markdown source of the article body.
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u64,
    pub author: Author,
}

/// The current session's user. An empty username means unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    /// Opaque credential issued at login/registration.
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One page of articles plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub articles_count: u64,
}

/// `{"article": ...}` envelope used by detail and mutation responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ArticleEnvelope {
    pub article: Article,
}

/// `{"user": ...}` envelope used by auth and profile responses.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

/// Fields for creating or editing an article.
///
/// Serialized under the `article` key of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

/// Profile fields for `PUT /user`. Unset fields are omitted from the body
/// so the server leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_decodes_from_wire_json() {
        let json = r#"{
            "slug": "how-to-train-your-dragon",
            "title": "How to train your dragon",
            "description": "Ever wonder how?",
            "body": "It takes a Jacobian",
            "tagList": ["dragons", "training"],
            "createdAt": "2016-02-18T03:22:56.637Z",
            "updatedAt": "2016-02-18T03:48:35.824Z",
            "favorited": false,
            "favoritesCount": 0,
            "author": {
                "username": "jake",
                "bio": "I work at statefarm",
                "image": "https://i.stack.imgur.com/xHWG8.jpg",
                "following": false
            }
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.slug, "how-to-train-your-dragon");
        assert_eq!(article.tag_list, vec!["dragons", "training"]);
        assert_eq!(article.author.username, "jake");
        assert_eq!(article.created_at, "2016-02-18T03:22:56.637Z");
    }

    #[test]
    fn article_page_decodes_count() {
        let json = r#"{"articles": [], "articlesCount": 42}"#;
        let page: ArticlePage = serde_json::from_str(json).unwrap();
        assert!(page.articles.is_empty());
        assert_eq!(page.articles_count, 42);
    }

    #[test]
    fn user_decodes_with_optional_fields_absent() {
        let json = r#"{"email": "jake@jake.jake", "username": "jake", "token": "jwt.here"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "jake");
        assert_eq!(user.bio, None);
        assert_eq!(user.image, None);
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            email: Some("new@example.com".to_string()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"email":"new@example.com"}"#);
    }

    #[test]
    fn draft_serializes_tag_list_in_camel_case() {
        let draft = ArticleDraft {
            title: "t".to_string(),
            description: "d".to_string(),
            body: "b".to_string(),
            tag_list: vec!["rust".to_string()],
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""tagList":["rust"]"#));
    }
}
