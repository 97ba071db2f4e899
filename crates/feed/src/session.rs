//! Authenticated session lifecycle.

use api_client::{ApiClient, ApiResult, AuthResponse, UserPayload};
use entities::{Story, User};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An authenticated user plus the token for their API calls.
///
/// Owned by the top-level application controller; dropped on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The server's view of the user after the last confirmed call.
    pub user: User,
    /// Opaque credential returned on signup/login.
    pub token: String,
}

fn user_from_payload(payload: UserPayload) -> User {
    User {
        username: payload.username,
        name: payload.name,
        created_at: payload.created_at,
        favorites: payload.favorites,
        // the API names the own-stories array `stories`
        own_stories: payload.stories,
    }
}

impl Session {
    fn from_auth(auth: AuthResponse) -> Self {
        Self {
            user: user_from_payload(auth.user),
            token: auth.token,
        }
    }

    /// Registers a new account and opens a session for it.
    pub async fn signup(
        client: &ApiClient,
        username: &str,
        password: &str,
        name: &str,
    ) -> ApiResult<Self> {
        let auth = client.signup(username, password, name).await?;
        Ok(Self::from_auth(auth))
    }

    /// Logs an existing user in.
    pub async fn login(client: &ApiClient, username: &str, password: &str) -> ApiResult<Self> {
        let auth = client.login(username, password).await?;
        Ok(Self::from_auth(auth))
    }

    /// Re-opens a session from stored credentials.
    ///
    /// Restoration is advisory: any failure just means "treat as logged
    /// out", so this returns `None` instead of an error.
    pub async fn restore(client: &ApiClient, token: &str, username: &str) -> Option<Self> {
        match client.user(token, username).await {
            Ok(payload) => Some(Self {
                user: user_from_payload(payload),
                token: token.to_string(),
            }),
            Err(e) => {
                debug!(username = %username, error = %e, "session restore failed");
                None
            }
        }
    }

    /// Marks `story` as a favorite on the server, then locally.
    pub async fn add_favorite(&mut self, client: &ApiClient, story: &Story) -> ApiResult<()> {
        client
            .add_favorite(&self.token, &self.user.username, &story.story_id)
            .await?;
        self.user.push_favorite(story.clone());
        Ok(())
    }

    /// Unmarks `story` as a favorite on the server, then locally.
    pub async fn remove_favorite(&mut self, client: &ApiClient, story: &Story) -> ApiResult<()> {
        client
            .remove_favorite(&self.token, &self.user.username, &story.story_id)
            .await?;
        self.user.drop_favorite(&story.story_id);
        Ok(())
    }

    /// Whether `story` is currently a favorite. No network call.
    pub fn is_favorite(&self, story: &Story) -> bool {
        self.user.is_favorite(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: "t".to_string(),
            author: "a".to_string(),
            url: "https://example.com".to_string(),
            username: "u".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_auth_maps_stories_to_own_stories() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{
                "user": {
                    "username": "crab",
                    "name": "Crab",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "favorites": [],
                    "stories": [{
                        "storyId": "mine",
                        "title": "t",
                        "author": "a",
                        "url": "https://example.com",
                        "username": "crab",
                        "createdAt": "2024-01-01T00:00:00.000Z"
                    }]
                },
                "token": "tok"
            }"#,
        )
        .unwrap();

        let session = Session::from_auth(auth);
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.own_stories.len(), 1);
        assert_eq!(session.user.own_stories[0].story_id, "mine");
        assert!(session.user.favorites.is_empty());
    }

    #[tokio::test]
    async fn test_restore_failure_yields_none() {
        // unroutable address, so the call fails at the transport layer
        let client = ApiClient::new("http://127.0.0.1:1");
        let session = Session::restore(&client, "stale-token", "crab").await;
        assert!(session.is_none());
    }

    #[test]
    fn test_is_favorite_delegates_to_user() {
        let mut session = Session {
            user: User {
                username: "crab".to_string(),
                name: "Crab".to_string(),
                created_at: Utc::now(),
                favorites: Vec::new(),
                own_stories: Vec::new(),
            },
            token: "tok".to_string(),
        };

        let s = story("a");
        assert!(!session.is_favorite(&s));
        session.user.push_favorite(s.clone());
        assert!(session.is_favorite(&s));
    }
}
