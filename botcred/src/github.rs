// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub profile and repository reads.
//!
//! Requests are unauthenticated and issued through an [`Octocrab`] client
//! pointed at the configured base URL. The client's retry layer is disabled
//! so every call maps to exactly one upstream request.

use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    error::{Error, FetchError},
    languages::RepositorySummary,
};

const PLATFORM: &str = "GitHub";
const MAX_LOGIN_CHARS: usize = 39;

/// Normalized GitHub account statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct ProfileRecord
{
    /// Account login.
    #[serde(rename(deserialize = "login"))]
    pub username:     String,
    /// Number of followers, zero when absent upstream.
    #[serde(default)]
    pub followers:    u64,
    /// Number of public repositories, zero when absent upstream.
    #[serde(default)]
    pub public_repos: u64,
}

/// Thin GitHub reader bound to a single base URL.
#[derive(Clone,)]
pub struct GitHubClient
{
    octocrab: Octocrab,
}

impl std::fmt::Debug for GitHubClient
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("GitHubClient",).finish_non_exhaustive()
    }
}

impl GitHubClient
{
    /// Builds an unauthenticated client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`](Error::Client) when the base URL is rejected
    /// or the underlying HTTP stack cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use botcred::GitHubClient;
    ///
    /// # async fn example() -> Result<(), botcred::Error> {
    /// let github = GitHubClient::new("https://api.github.com",)?;
    /// let profile = github.fetch_profile("octocat",).await;
    /// println!("{profile:?}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_url: &str,) -> Result<Self, Error,>
    {
        let octocrab = Octocrab::builder()
            .add_retry_config(RetryConfig::None,)
            .base_uri(base_url,)
            .map_err(|e| Error::client(PLATFORM, e,),)?
            .build()
            .map_err(|e| Error::client(PLATFORM, e,),)?;

        Ok(Self {
            octocrab,
        },)
    }

    /// Fetches the public profile of `username`.
    ///
    /// # Errors
    ///
    /// * [`FetchError::InvalidIdentifier`] when `username` is not a GitHub
    ///   login; nothing is sent upstream.
    /// * [`FetchError::NotFound`] when GitHub answers 404.
    /// * [`FetchError::Status`] for any other non-200 status.
    /// * [`FetchError::Transport`] when no response was received.
    /// * [`FetchError::Decode`] when the payload is not a user object.
    pub async fn fetch_profile(&self, username: &str,) -> Result<ProfileRecord, FetchError,>
    {
        let route = user_route(username,)?;
        debug!("Fetching GitHub profile for {}", username);
        self.get_json(route, username,).await
    }

    /// Fetches the first page of public repositories owned by `username`.
    ///
    /// # Errors
    ///
    /// Same failure domains as [`GitHubClient::fetch_profile`].
    pub async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary,>, FetchError,>
    {
        let route = format!("{}/repos", user_route(username,)?);
        debug!("Fetching GitHub repositories for {}", username);
        self.get_json(route, username,).await
    }

    async fn get_json<T,>(&self, route: String, identifier: &str,) -> Result<T, FetchError,>
    where
        T: DeserializeOwned,
    {
        let response =
            self.octocrab._get(route,).await.map_err(|e| FetchError::transport(PLATFORM, e,),)?;

        match response.status().as_u16() {
            200 => {}
            404 => return Err(FetchError::not_found(PLATFORM, identifier,),),
            status => {
                return Err(FetchError::Status {
                    platform: PLATFORM,
                    status,
                },);
            }
        }

        let body = self
            .octocrab
            .body_to_string(response,)
            .await
            .map_err(|e| FetchError::transport(PLATFORM, e,),)?;

        serde_json::from_str(&body,).map_err(|source| FetchError::Decode {
            platform: PLATFORM,
            source,
        },)
    }
}

/// Builds the `/users/{login}` route after checking that `username` only
/// uses characters GitHub allows in logins.
fn user_route(username: &str,) -> Result<String, FetchError,>
{
    let valid = !username.is_empty()
        && username.len() <= MAX_LOGIN_CHARS
        && !username.starts_with('-',)
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-',);

    if valid {
        Ok(format!("/users/{username}"),)
    } else {
        Err(FetchError::InvalidIdentifier {
            platform:   PLATFORM,
            identifier: username.to_owned(),
        },)
    }
}

#[cfg(test)]
mod tests
{
    use super::{GitHubClient, ProfileRecord, user_route};
    use crate::error::FetchError;

    #[test]
    fn profile_deserializes_from_user_payload()
    {
        let payload = r#"{
            "login": "octocat",
            "id": 583231,
            "followers": 9000,
            "public_repos": 8,
            "type": "User"
        }"#;

        let profile: ProfileRecord = serde_json::from_str(payload,).expect("deserialization failed",);
        assert_eq!(
            profile,
            ProfileRecord {
                username:     "octocat".to_owned(),
                followers:    9000,
                public_repos: 8,
            }
        );
    }

    #[test]
    fn missing_counters_default_to_zero()
    {
        let profile: ProfileRecord =
            serde_json::from_str(r#"{"login": "ghost"}"#,).expect("deserialization failed",);
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.public_repos, 0);
    }

    #[test]
    fn payload_without_login_is_rejected()
    {
        let result = serde_json::from_str::<ProfileRecord,>(r#"{"followers": 1}"#,);
        assert!(result.is_err());
    }

    #[test]
    fn user_route_accepts_logins()
    {
        assert_eq!(user_route("octocat",).expect("valid login",), "/users/octocat");
        assert_eq!(user_route("octo-cat-42",).expect("valid login",), "/users/octo-cat-42");
    }

    #[test]
    fn user_route_rejects_path_and_query_characters()
    {
        let long = "a".repeat(40,);
        for username in ["", "nobody?x=1", "octocat/repos", "octo cat", "-octocat", "../orgs", "octö", long.as_str(),]
        {
            match user_route(username,) {
                Err(FetchError::InvalidIdentifier {
                    identifier, ..
                },) => assert_eq!(identifier, username),
                other => panic!("expected {username:?} to be rejected, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn rejects_invalid_base_url()
    {
        let result = GitHubClient::new("not a uri",);
        assert!(result.is_err());
    }
}
