//! Core entity definitions for the hacksnooze client.
//!
//! This crate defines the data types shared across the client: stories as
//! returned by the Hack-or-Snooze API, and the authenticated user with their
//! favorites and own-stories bookkeeping.

mod error;
mod story;
mod user;

pub use error::*;
pub use story::*;
pub use user::*;
