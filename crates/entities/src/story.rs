//! Story-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::EntityError;

/// A single submitted story, as returned by the API.
///
/// Identity is `story_id`; all collection lookups and removals compare ids,
/// never whole values. Immutable after creation except via a server round
/// trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Server-issued stable identifier.
    pub story_id: String,
    /// Story title.
    pub title: String,
    /// Author credited by the submitter.
    pub author: String,
    /// Link the story points at.
    pub url: String,
    /// Username of the submitting user.
    pub username: String,
    /// When the story was created, server clock.
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Extracts the network authority out of the story URL for display,
    /// keeping any explicit port.
    ///
    /// Fails on malformed URLs or URLs without a host component, so callers
    /// should only invoke this on server-validated input.
    pub fn host_name(&self) -> Result<String, EntityError> {
        let parsed = Url::parse(&self.url)?;
        let host = parsed.host_str().ok_or(EntityError::MissingHost)?;
        Ok(match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }
}
