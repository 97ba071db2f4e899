//! Story feed and session layer.
//!
//! Sits between the typed HTTP client and any front-end: [`StoryList`] holds
//! the global feed, [`Session`] the authenticated user. Both mutate local
//! collections only after the server confirms an operation, so a failed call
//! leaves all state untouched.

mod session;
mod story_list;

pub use session::*;
pub use story_list::*;
