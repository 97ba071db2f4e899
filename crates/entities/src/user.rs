//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Story;

/// The authenticated user, with their server-mirrored story collections.
///
/// `favorites` and `own_stories` reflect server state immediately after each
/// successful mutating call. They may transiently diverge from the global
/// feed (a story deleted by another user lingers until the next full fetch).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier, also used in favorites endpoint paths.
    pub username: String,
    /// Display name.
    pub name: String,
    /// When the account was created, server clock.
    pub created_at: DateTime<Utc>,
    /// Stories this user has marked as favorites.
    pub favorites: Vec<Story>,
    /// Stories this user has submitted.
    pub own_stories: Vec<Story>,
}

impl User {
    /// Whether `story` is in this user's favorites. Purely local, by id.
    pub fn is_favorite(&self, story: &Story) -> bool {
        self.favorites.iter().any(|s| s.story_id == story.story_id)
    }

    /// Appends `story` to the favorites list.
    ///
    /// Called only after the server confirmed the favorite; replaces any
    /// stale entry with the same id so membership stays duplicate-free.
    pub fn push_favorite(&mut self, story: Story) {
        self.favorites.retain(|s| s.story_id != story.story_id);
        self.favorites.push(story);
    }

    /// Removes the story with `story_id` from the favorites list.
    pub fn drop_favorite(&mut self, story_id: &str) {
        self.favorites.retain(|s| s.story_id != story_id);
    }

    /// Removes the story with `story_id` from every user-held collection.
    pub fn purge_story(&mut self, story_id: &str) {
        self.own_stories.retain(|s| s.story_id != story_id);
        self.favorites.retain(|s| s.story_id != story_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: format!("story {id}"),
            author: "author".to_string(),
            url: "https://example.com".to_string(),
            username: "poster".to_string(),
            created_at: Utc::now(),
        }
    }

    fn user() -> User {
        User {
            username: "tester".to_string(),
            name: "Test User".to_string(),
            created_at: Utc::now(),
            favorites: Vec::new(),
            own_stories: Vec::new(),
        }
    }

    #[test]
    fn test_favorite_membership() {
        let mut u = user();
        let s = story("a");

        assert!(!u.is_favorite(&s));
        u.push_favorite(s.clone());
        assert!(u.is_favorite(&s));
        u.drop_favorite("a");
        assert!(!u.is_favorite(&s));
    }

    #[test]
    fn test_push_favorite_deduplicates() {
        let mut u = user();
        u.push_favorite(story("a"));
        u.push_favorite(story("a"));
        assert_eq!(u.favorites.len(), 1);
    }

    #[test]
    fn test_purge_story_clears_both_lists() {
        let mut u = user();
        u.own_stories.push(story("a"));
        u.push_favorite(story("a"));

        u.purge_story("a");

        assert!(u.own_stories.is_empty());
        assert!(u.favorites.is_empty());
    }
}
