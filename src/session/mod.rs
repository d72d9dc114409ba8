//! Session persistence: the bearer token and its durable storage.

mod store;
mod token;

pub use store::{SessionError, SessionStore};
pub use token::Token;
