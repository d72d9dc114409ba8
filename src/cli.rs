//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// Command-line client for a Conduit-style blog.
#[derive(Debug, Parser)]
#[command(name = "conduit", version, about)]
pub struct Cli {
    /// Override the API base URL from the config file.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one page of articles.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a single article.
    Read { slug: String },

    /// Sign in and persist the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create a new account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Drop the persisted session.
    Logout,

    /// Show the signed-in user's profile.
    Whoami,

    /// Update profile fields; only the flags you pass are sent.
    Profile {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },

    /// Publish a new article.
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        body: String,
        /// May be repeated for multiple tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Replace an existing article's content.
    Edit {
        slug: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        body: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete an article.
    Delete { slug: String },

    /// Favorite an article.
    Favorite { slug: String },

    /// Remove an article from favorites.
    Unfavorite { slug: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_to_page_one() {
        let cli = Cli::parse_from(["conduit", "list"]);
        assert!(matches!(cli.command, Command::List { page: 1 }));
    }

    #[test]
    fn repeated_tags_accumulate() {
        let cli = Cli::parse_from([
            "conduit", "publish", "--title", "t", "--description", "d", "--body", "b", "--tag",
            "rust", "--tag", "blog",
        ]);
        match cli.command {
            Command::Publish { tags, .. } => assert_eq!(tags, vec!["rust", "blog"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn base_url_is_global() {
        let cli = Cli::parse_from(["conduit", "list", "--base-url", "http://localhost:3000/api"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000/api"));
    }
}
