//! Composition root: wires config, session, API client, and state store
//! together and maps CLI commands onto API calls plus intent dispatches.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use conduit_client::api::{offset_for_page, ApiError, ArticleDraft, BlogClient, ProfileUpdate};
use conduit_client::config::Config;
use conduit_client::session::{SessionStore, Token};
use conduit_client::store::{BlogIntent, BlogState, BlogStore, FetchStatus};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let session = match config.session.token_path.clone() {
        Some(path) => SessionStore::new(path),
        None => SessionStore::new(SessionStore::default_path()),
    };
    let client = BlogClient::new(config.api.base_url.clone());
    let store = BlogStore::new();

    run(cli.command, &client, &session, &store).await
}

async fn run(
    command: Command,
    client: &BlogClient,
    session: &SessionStore,
    store: &BlogStore,
) -> Result<()> {
    match command {
        Command::List { page } => {
            store.dispatch(BlogIntent::PageChanged { page });
            let seq = store.begin_list_fetch();
            let token = session.load()?;
            match client.list_articles(offset_for_page(page), token.as_ref()).await {
                Ok(fetched) => store.dispatch(BlogIntent::ListSucceeded {
                    seq,
                    articles: fetched.articles,
                    total_count: fetched.articles_count,
                }),
                Err(e) => store.dispatch(BlogIntent::ListFailed {
                    seq,
                    message: e.display_message(),
                }),
            }
            render_list(&store.state())
        }

        Command::Read { slug } => {
            let token = session.load()?;
            let article = record_failure(store, client.get_article(&slug, token.as_ref()).await)?;
            store.dispatch(BlogIntent::ArticleLoaded { article });

            let state = store.state();
            let article = state
                .article(&slug)
                .ok_or_else(|| anyhow!("article '{}' missing after load", slug))?;
            println!("# {}", article.title);
            println!("by {} · {}", article.author.username, article.created_at);
            if !article.tag_list.is_empty() {
                println!("tags: {}", article.tag_list.join(", "));
            }
            println!();
            println!("{}", article.body);
            Ok(())
        }

        Command::Login { email, password } => {
            let user = record_failure(store, client.login(&email, &password).await)?;
            // The only place a token gets persisted.
            session.save(&Token::new(user.token.clone()))?;
            store.dispatch(BlogIntent::UserAuthenticated { user });
            println!("Signed in as {}", store.state().user.username);
            Ok(())
        }

        Command::Register {
            username,
            email,
            password,
        } => {
            let user = record_failure(store, client.register(&username, &email, &password).await)?;
            store.dispatch(BlogIntent::UserAuthenticated { user });
            println!(
                "Registered {}. Run `conduit login` to start a session.",
                store.state().user.username
            );
            Ok(())
        }

        Command::Logout => {
            session.clear()?;
            store.dispatch(BlogIntent::LoggedOut);
            println!("Signed out");
            Ok(())
        }

        Command::Whoami => {
            let token = require_session(session)?;
            let user = record_failure(store, client.current_user(&token).await)?;
            store.dispatch(BlogIntent::UserAuthenticated { user });

            let state = store.state();
            println!("{} <{}>", state.user.username, state.user.email);
            if let Some(ref bio) = state.user.bio {
                println!("{}", bio);
            }
            Ok(())
        }

        Command::Profile {
            email,
            username,
            password,
            bio,
            image,
        } => {
            let token = require_session(session)?;
            let update = ProfileUpdate {
                email,
                username,
                password,
                bio,
                image,
            };
            let user = record_failure(store, client.update_user(&token, &update).await)?;
            store.dispatch(BlogIntent::UserAuthenticated { user });
            println!("Profile updated for {}", store.state().user.username);
            Ok(())
        }

        Command::Publish {
            title,
            description,
            body,
            tags,
        } => {
            let token = require_session(session)?;
            let draft = ArticleDraft {
                title,
                description,
                body,
                tag_list: tags,
            };
            let article = record_failure(store, client.create_article(&token, &draft).await)?;
            let slug = article.slug.clone();
            store.dispatch(BlogIntent::ArticleCreated { article });
            println!("Published '{}'", slug);
            Ok(())
        }

        Command::Edit {
            slug,
            title,
            description,
            body,
            tags,
        } => {
            let token = require_session(session)?;
            let draft = ArticleDraft {
                title,
                description,
                body,
                tag_list: tags,
            };
            let article = record_failure(store, client.edit_article(&token, &slug, &draft).await)?;
            store.dispatch(BlogIntent::ArticleEdited { article });
            println!("Updated '{}'", slug);
            Ok(())
        }

        Command::Delete { slug } => {
            let token = require_session(session)?;
            let article = record_failure(store, client.delete_article(&token, &slug).await)?;
            store.dispatch(BlogIntent::ArticleDeleted { article });
            println!("Deleted '{}'", slug);
            Ok(())
        }

        Command::Favorite { slug } => {
            let token = require_session(session)?;
            let article = record_failure(store, client.favorite(&token, &slug).await)?;
            let count = article.favorites_count;
            store.dispatch(BlogIntent::LikeToggled { article });
            println!("Favorited '{}' ({} favorites)", slug, count);
            Ok(())
        }

        Command::Unfavorite { slug } => {
            let token = require_session(session)?;
            let article = record_failure(store, client.unfavorite(&token, &slug).await)?;
            let count = article.favorites_count;
            store.dispatch(BlogIntent::LikeToggled { article });
            println!("Unfavorited '{}' ({} favorites)", slug, count);
            Ok(())
        }
    }
}

/// Record a failed call in the store before surfacing it.
fn record_failure<T>(store: &BlogStore, result: Result<T, ApiError>) -> Result<T> {
    result.map_err(|e| {
        store.dispatch(BlogIntent::OperationFailed {
            message: e.display_message(),
        });
        anyhow!(e.display_message())
    })
}

fn require_session(session: &SessionStore) -> Result<Token> {
    session
        .load()?
        .ok_or_else(|| anyhow!("not signed in; run `conduit login` first"))
}

fn render_list(state: &BlogState) -> Result<()> {
    if state.status == FetchStatus::Rejected {
        return Err(anyhow!(
            "{}",
            state.error.as_deref().unwrap_or("list fetch failed")
        ));
    }

    if state.articles.is_empty() {
        println!("No articles.");
    }
    for article in &state.articles {
        let favorite_marker = if article.favorited { "★" } else { "☆" };
        println!(
            "{} {:>4}  {}  — {} ({})",
            favorite_marker,
            article.favorites_count,
            article.slug,
            article.title,
            article.author.username
        );
    }
    println!("page {} of {}", state.current_page, state.page_count());
    Ok(())
}

/// Initialize tracing from the environment.
///
/// `RUST_LOG` controls verbosity; warnings and up go to stderr by default
/// so command output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
