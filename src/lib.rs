//! Client library for a Conduit-style blog API.
//!
//! Three layers: [`api`] turns typed requests into single HTTP calls,
//! [`session`] persists the bearer token across runs, and [`store`] holds
//! the application state that API call completions mutate through intents.
//! [`config`] supplies the endpoint and file locations. The binary wires
//! them together.

pub mod api;
pub mod config;
pub mod session;
pub mod store;
