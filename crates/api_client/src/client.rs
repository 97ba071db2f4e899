//! HTTP client for the Hack-or-Snooze API.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    ApiError, ApiResult, AuthResponse, CreateStoryRequest, LoginCredentials, LoginRequest,
    SignupCredentials, SignupRequest, StoriesResponse, StoryDraft, StoryResponse, TokenBody,
    UserPayload, UserResponse,
};
use entities::Story;

/// Client for the remote story API.
///
/// Holds no session state; authenticated calls take the token explicitly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// API origin, without a trailing slash.
    base_url: String,
    /// HTTP client.
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client against `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a transport result to [`ApiError`] and rejects non-2xx statuses.
    async fn checked(
        request: reqwest::RequestBuilder,
    ) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn into_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Fetches the full story feed, unauthenticated, in server order.
    pub async fn stories(&self) -> ApiResult<Vec<Story>> {
        debug!("GET /stories");
        let response = Self::checked(self.http.get(self.url("/stories"))).await?;
        let body: StoriesResponse = Self::into_json(response).await?;
        Ok(body.stories)
    }

    /// Submits a new story and returns the server's view of it.
    pub async fn create_story(&self, token: &str, draft: StoryDraft) -> ApiResult<Story> {
        debug!(title = %draft.title, "POST /stories");
        let request = CreateStoryRequest {
            token: token.to_string(),
            story: draft,
        };
        let response =
            Self::checked(self.http.post(self.url("/stories")).json(&request)).await?;
        let body: StoryResponse = Self::into_json(response).await?;
        Ok(body.story)
    }

    /// Deletes the story with `story_id`.
    pub async fn delete_story(&self, token: &str, story_id: &str) -> ApiResult<()> {
        debug!(story_id = %story_id, "DELETE /stories/:id");
        let body = TokenBody {
            token: token.to_string(),
        };
        Self::checked(
            self.http
                .delete(self.url(&format!("/stories/{story_id}")))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// Registers a new account and returns the user plus a fresh token.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> ApiResult<AuthResponse> {
        debug!(username = %username, "POST /signup");
        let request = SignupRequest {
            user: SignupCredentials {
                username: username.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            },
        };
        let response =
            Self::checked(self.http.post(self.url("/signup")).json(&request)).await?;
        Self::into_json(response).await
    }

    /// Logs an existing user in and returns the user plus a fresh token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        debug!(username = %username, "POST /login");
        let request = LoginRequest {
            user: LoginCredentials {
                username: username.to_string(),
                password: password.to_string(),
            },
        };
        let response =
            Self::checked(self.http.post(self.url("/login")).json(&request)).await?;
        Self::into_json(response).await
    }

    /// Fetches a user by name, authenticating with a previously issued
    /// token passed as a query parameter.
    pub async fn user(&self, token: &str, username: &str) -> ApiResult<UserPayload> {
        debug!(username = %username, "GET /users/:username");
        let response = Self::checked(
            self.http
                .get(self.url(&format!("/users/{username}")))
                .query(&[("token", token)]),
        )
        .await?;
        let body: UserResponse = Self::into_json(response).await?;
        Ok(body.user)
    }

    /// Marks `story_id` as a favorite of `username`.
    pub async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<()> {
        debug!(story_id = %story_id, "POST /users/:username/favorites/:id");
        let body = TokenBody {
            token: token.to_string(),
        };
        Self::checked(
            self.http
                .post(self.url(&format!("/users/{username}/favorites/{story_id}")))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// Removes `story_id` from the favorites of `username`.
    pub async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<()> {
        debug!(story_id = %story_id, "DELETE /users/:username/favorites/:id");
        let body = TokenBody {
            token: token.to_string(),
        };
        Self::checked(
            self.http
                .delete(self.url(&format!("/users/{username}/favorites/{story_id}")))
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ApiClient::new("https://hack-or-snooze-v3.herokuapp.com/");
        assert_eq!(client.base_url, "https://hack-or-snooze-v3.herokuapp.com");
    }

    #[test]
    fn test_url_joins_path() {
        let client = ApiClient::new("http://localhost:3000");
        assert_eq!(client.url("/stories"), "http://localhost:3000/stories");
        assert_eq!(
            client.url("/users/crab/favorites/abc"),
            "http://localhost:3000/users/crab/favorites/abc"
        );
    }
}
