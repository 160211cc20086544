// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Moltbook agent profile reads.
//!
//! The agent API wraps every payload in an envelope carrying a `success`
//! flag. [`MoltbookClient::fetch_agent`] unwraps the envelope and resolves all
//! optional agent fields to concrete defaults before returning, so the
//! renderer never sees an absent value.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, FetchError};

const PLATFORM: &str = "Moltbook";

/// Number of description characters kept in [`AgentRecord::description`].
pub const DESCRIPTION_EXCERPT_CHARS: usize = 20;
const ELLIPSIS: &str = "...";

/// Normalized Moltbook agent statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct AgentRecord
{
    /// Agent name as reported by Moltbook.
    pub name:           String,
    /// Karma score; may be negative.
    pub karma:          i64,
    /// Number of accounts following the agent.
    pub followers:      u64,
    /// Whether a human owner has claimed and verified the agent.
    pub verified_owner: bool,
    /// Description excerpt of at most twenty characters plus an ellipsis.
    pub description:    String,
}

#[derive(Debug, Deserialize,)]
struct AgentEnvelope
{
    #[serde(default)]
    success: bool,
    #[serde(default)]
    agent:   Option<AgentPayload,>,
    #[serde(default)]
    error:   Option<String,>,
}

#[derive(Debug, Deserialize,)]
struct AgentPayload
{
    name:           String,
    #[serde(default)]
    karma:          Option<i64,>,
    #[serde(default)]
    follower_count: Option<u64,>,
    #[serde(default, alias = "is_verified")]
    is_claimed:     Option<bool,>,
    #[serde(default)]
    description:    Option<String,>,
}

impl From<AgentPayload,> for AgentRecord
{
    fn from(payload: AgentPayload,) -> Self
    {
        Self {
            name:           payload.name,
            karma:          payload.karma.unwrap_or_default(),
            followers:      payload.follower_count.unwrap_or_default(),
            verified_owner: payload.is_claimed.unwrap_or_default(),
            description:    excerpt(payload.description.as_deref().unwrap_or_default(),),
        }
    }
}

/// Moltbook reader that authenticates with a static bearer credential.
#[derive(Clone,)]
pub struct MoltbookClient
{
    http:     Client,
    base_url: String,
    api_key:  String,
}

impl std::fmt::Debug for MoltbookClient
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("MoltbookClient",).field("base_url", &self.base_url,).finish_non_exhaustive()
    }
}

impl MoltbookClient
{
    /// Builds a client for `base_url` that sends `api_key` as bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`](Error::Client) when the TLS stack cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String,>, api_key: impl Into<String,>,) -> Result<Self, Error,>
    {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),)
            .build()
            .map_err(|e| Error::client(PLATFORM, e,),)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        },)
    }

    /// Fetches the profile of the agent called `name`.
    ///
    /// # Errors
    ///
    /// * [`FetchError::NotFound`] when Moltbook answers 404.
    /// * [`FetchError::Status`] for any other non-200 status.
    /// * [`FetchError::Transport`] when no response was received.
    /// * [`FetchError::Decode`] when the body is not a valid envelope.
    /// * [`FetchError::Unsuccessful`] when the envelope reports failure or
    ///   carries no agent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use botcred::MoltbookClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let moltbook = MoltbookClient::new("https://www.moltbook.com/api/v1", "moltbook_sk_...",)?;
    /// let agent = moltbook.fetch_agent("clawd",).await?;
    /// println!("{} has {} karma", agent.name, agent.karma);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_agent(&self, name: &str,) -> Result<AgentRecord, FetchError,>
    {
        debug!("Fetching Moltbook agent profile for {}", name);

        let response = self
            .http
            .get(format!("{}/agents/profile", self.base_url),)
            .query(&[("name", name,),],)
            .bearer_auth(&self.api_key,)
            .send()
            .await
            .map_err(|e| FetchError::transport(PLATFORM, e,),)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(FetchError::not_found(PLATFORM, name,),),
            status => {
                return Err(FetchError::Status {
                    platform: PLATFORM,
                    status:   status.as_u16(),
                },);
            }
        }

        let body = response.text().await.map_err(|e| FetchError::transport(PLATFORM, e,),)?;
        parse_envelope(&body,)
    }
}

/// Decodes an agent envelope into a record.
fn parse_envelope(body: &str,) -> Result<AgentRecord, FetchError,>
{
    let envelope: AgentEnvelope = serde_json::from_str(body,).map_err(|source| {
        FetchError::Decode {
            platform: PLATFORM,
            source,
        }
    },)?;

    if !envelope.success {
        let message = envelope.error.unwrap_or_else(|| "success flag was false".to_owned(),);
        return Err(FetchError::unsuccessful(PLATFORM, message,),);
    }

    envelope
        .agent
        .map(AgentRecord::from,)
        .ok_or_else(|| FetchError::unsuccessful(PLATFORM, "response carried no agent",),)
}

/// Shortens a description to [`DESCRIPTION_EXCERPT_CHARS`] characters.
///
/// An ellipsis is appended only when characters were dropped.
pub fn excerpt(description: &str,) -> String
{
    match description.char_indices().nth(DESCRIPTION_EXCERPT_CHARS,) {
        Some((cut, _,),) => {
            let mut shortened = String::with_capacity(cut + ELLIPSIS.len(),);
            shortened.push_str(&description[..cut],);
            shortened.push_str(ELLIPSIS,);
            shortened
        }
        None => description.to_owned(),
    }
}
