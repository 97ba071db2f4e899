//! The global story feed.

use api_client::{ApiClient, ApiResult, StoryDraft};
use entities::Story;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Session;

/// Ordered collection of stories, newest first on insert.
///
/// Invariant: no duplicate ids after any operation completes successfully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryList {
    /// Stories in display order.
    pub stories: Vec<Story>,
}

impl StoryList {
    /// Fetches the full feed in one unauthenticated call, preserving
    /// server order. No pagination.
    pub async fn fetch(client: &ApiClient) -> ApiResult<Self> {
        let stories = client.stories().await?;
        debug!(count = stories.len(), "fetched story feed");
        Ok(Self { stories })
    }

    /// Submits `draft` as the session user, then inserts the confirmed
    /// story at the front of the feed and of the user's own stories.
    ///
    /// No optimistic insert: a failed call leaves both lists unchanged.
    pub async fn add_story(
        &mut self,
        client: &ApiClient,
        session: &mut Session,
        draft: StoryDraft,
    ) -> ApiResult<Story> {
        let story = client.create_story(&session.token, draft).await?;

        self.insert_front(story.clone());
        session
            .user
            .own_stories
            .retain(|s| s.story_id != story.story_id);
        session.user.own_stories.insert(0, story.clone());

        Ok(story)
    }

    /// Deletes the story with `story_id`, then purges it from the feed and
    /// from the session user's own stories and favorites.
    pub async fn remove_story(
        &mut self,
        client: &ApiClient,
        session: &mut Session,
        story_id: &str,
    ) -> ApiResult<()> {
        client.delete_story(&session.token, story_id).await?;

        self.remove_by_id(story_id);
        session.user.purge_story(story_id);
        Ok(())
    }

    /// Inserts `story` at the front, dropping any stale entry with the
    /// same id first.
    pub fn insert_front(&mut self, story: Story) {
        self.stories.retain(|s| s.story_id != story.story_id);
        self.stories.insert(0, story);
    }

    /// Removes the story with `story_id` from the feed, if present.
    pub fn remove_by_id(&mut self, story_id: &str) {
        self.stories.retain(|s| s.story_id != story_id);
    }

    /// Looks a story up by id.
    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }
}
