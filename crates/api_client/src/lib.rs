//! Typed HTTP client for the Hack-or-Snooze REST API.
//!
//! One method per endpoint, returning deserialized wire payloads. No
//! retries and no local state: the feed layer owns all bookkeeping.

mod client;
mod error;
mod types;

pub use client::*;
pub use error::*;
pub use types::*;

/// Base URL of the production API.
pub const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";
