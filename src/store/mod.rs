//! Application state container.
//!
//! Unidirectional data flow over a single state record:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! API call completions become intents; the reducer is the only place
//! state changes. [`BlogStore`] is the shared handle the composition root
//! owns and hands to whoever needs to dispatch or read.

mod handle;
mod intent;
mod reducer;
mod state;

pub use handle::BlogStore;
pub use intent::BlogIntent;
pub use reducer::{BlogReducer, Reducer};
pub use state::{BlogState, FetchStatus};
