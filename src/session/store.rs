//! Durable session storage.
//!
//! One file holds the bearer token as a plain string. `load` re-reads the
//! file on every call rather than caching in memory, so an external logout
//! (deleting the file) takes effect on the next read. Only the
//! login/register success paths call `save` and only logout calls `clear`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::token::Token;

/// Errors that can occur reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove session file '{path}': {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed token store.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default session file path.
    ///
    /// Uses `~/.config/conduit/token` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("conduit").join("token")
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current token, if any.
    ///
    /// A missing file means no session. An empty or whitespace-only file
    /// is treated the same way.
    pub fn load(&self) -> Result<Option<Token>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Token::new(trimmed)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Persist a token, creating parent directories as needed.
    pub fn save(&self, token: &Token) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, token.expose()).map_err(|e| SessionError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), "Session token saved");
        Ok(())
    }

    /// Remove the stored token. Removing an absent file is a success.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Clear {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
