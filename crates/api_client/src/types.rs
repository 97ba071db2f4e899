//! Wire request and response types.
//!
//! Field names mirror the API's JSON exactly (camelCase); the own-stories
//! array arrives under the key `stories` on user payloads.

use chrono::{DateTime, Utc};
use entities::Story;
use serde::{Deserialize, Serialize};

// ============================================================================
// Story endpoints
// ============================================================================

/// Body of `GET /stories`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoriesResponse {
    pub stories: Vec<Story>,
}

/// Body of `POST /stories` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryResponse {
    pub story: Story,
}

/// User-supplied fields of a story to submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Request body of `POST /stories`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStoryRequest {
    pub token: String,
    pub story: StoryDraft,
}

/// Request body for endpoints authenticated by a token alone
/// (`DELETE /stories/:id`, favorites add/remove).
#[derive(Debug, Clone, Serialize)]
pub struct TokenBody {
    pub token: String,
}

// ============================================================================
// User endpoints
// ============================================================================

/// Request body of `POST /signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub user: SignupCredentials,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupCredentials {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Request body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user: LoginCredentials,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// The server's view of a user, shared by signup, login, and session
/// restore responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorites: Vec<Story>,
    /// Stories this user submitted; the API calls the array `stories`.
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// Body of `POST /signup` and `POST /login` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: UserPayload,
    pub token: String,
}

/// Body of `GET /users/:username`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_response_shape() {
        let response: StoriesResponse = serde_json::from_str(
            r#"{
                "stories": [
                    {
                        "storyId": "A",
                        "title": "first",
                        "author": "a",
                        "url": "https://a.example.com",
                        "username": "ua",
                        "createdAt": "2024-01-01T00:00:00.000Z"
                    },
                    {
                        "storyId": "B",
                        "title": "second",
                        "author": "b",
                        "url": "https://b.example.com",
                        "username": "ub",
                        "createdAt": "2024-01-02T00:00:00.000Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        let ids: Vec<&str> = response
            .stories
            .iter()
            .map(|s| s.story_id.as_str())
            .collect();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn test_auth_response_own_stories_key() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "user": {
                    "username": "crab",
                    "name": "Crab",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "favorites": [],
                    "stories": []
                },
                "token": "tok-1"
            }"#,
        )
        .unwrap();

        assert_eq!(response.user.username, "crab");
        assert_eq!(response.token, "tok-1");
    }

    #[test]
    fn test_user_payload_missing_lists_default_empty() {
        let payload: UserPayload = serde_json::from_str(
            r#"{
                "username": "crab",
                "name": "Crab",
                "createdAt": "2024-01-01T00:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert!(payload.favorites.is_empty());
        assert!(payload.stories.is_empty());
    }

    #[test]
    fn test_create_story_request_shape() {
        let request = CreateStoryRequest {
            token: "tok".to_string(),
            story: StoryDraft {
                title: "t".to_string(),
                author: "a".to_string(),
                url: "https://example.com".to_string(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["token"], "tok");
        assert_eq!(value["story"]["title"], "t");
    }
}
