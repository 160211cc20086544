// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Badge assembly pipeline.
//!
//! A request walks through the following steps strictly in sequence:
//!
//! 1. fetch the Moltbook agent (fatal on failure);
//! 2. when a GitHub username was supplied, fetch its profile and repository
//!    listing (failures degrade the owner section only);
//! 3. reduce the repository listing to a dominant language;
//! 4. render the badge with the template matching the data obtained.

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    badge::{BadgeStats, BadgeVariant, render_badge},
    error::FetchError,
    github::{GitHubClient, ProfileRecord},
    languages::dominant_language,
    moltbook::{AgentRecord, MoltbookClient},
    tier::TierLabel,
};

/// Response body produced for a badge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct BadgeResponse
{
    /// Moltbook agent identifier supplied by the caller.
    pub primary_user:   String,
    /// GitHub username supplied by the caller, if any.
    pub secondary_user: Option<String,>,
    /// Rendered badge text.
    pub badge:          String,
    /// Raw statistics separated by source.
    pub stats:          StatsPayload,
}

/// Raw statistics embedded in a [`BadgeResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct StatsPayload
{
    /// Agent statistics.
    pub primary:   AgentStats,
    /// Owner statistics, an inline error marker, or `null` when not requested.
    pub secondary: Option<OwnerSection,>,
}

/// Agent statistics together with the derived karma tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct AgentStats
{
    /// Normalized agent record, flattened into the JSON object.
    #[serde(flatten)]
    pub agent: AgentRecord,
    /// Tier derived from the agent's karma.
    pub tier:  TierLabel,
}

/// GitHub owner statistics derived from the profile and repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct OwnerStats
{
    /// GitHub login as reported upstream.
    pub username:     String,
    /// Number of followers of the account.
    pub followers:    u64,
    /// Number of public repositories owned by the account.
    pub repos:        u64,
    /// Most frequent language on the first repository page, or `Polyglot`.
    pub top_language: String,
}

/// Outcome of the optional owner lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(untagged)]
pub enum OwnerSection
{
    /// The owner profile was fetched.
    Available(OwnerStats,),
    /// The owner lookup failed; `error` carries the diagnostic.
    Failed {
        /// Display form of the failed lookup.
        error: String,
    },
}

impl OwnerSection
{
    fn stats(&self,) -> Option<&OwnerStats,>
    {
        match self {
            Self::Available(stats,) => Some(stats,),
            Self::Failed {
                ..
            } => None,
        }
    }
}

/// Upstream clients needed to assemble a badge.
#[derive(Debug, Clone,)]
pub struct BadgeService
{
    github:   GitHubClient,
    moltbook: MoltbookClient,
}

impl BadgeService
{
    /// Bundles the upstream clients.
    pub fn new(github: GitHubClient, moltbook: MoltbookClient,) -> Self
    {
        Self {
            github,
            moltbook,
        }
    }

    /// Assembles the badge for `agent_name`, optionally enriched with the
    /// GitHub account `owner_username`.
    ///
    /// A blank `owner_username` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the agent lookup. Owner lookup failures
    /// never surface here; they are recorded in
    /// [`StatsPayload::secondary`].
    pub async fn build(
        &self,
        agent_name: &str,
        owner_username: Option<&str,>,
    ) -> Result<BadgeResponse, FetchError,>
    {
        let agent = self.moltbook.fetch_agent(agent_name,).await?;

        let owner_username =
            owner_username.map(str::trim,).filter(|username| !username.is_empty(),);
        let owner = match owner_username {
            Some(username,) => Some(self.owner_section(username,).await,),
            None => None,
        };

        let stats = BadgeStats {
            agent_name:         &agent.name,
            karma:              agent.karma,
            followers:          agent.followers,
            owner_repositories: owner.as_ref().and_then(OwnerSection::stats,).map(|owner| owner.repos,),
        };
        let variant = BadgeVariant::select(&stats,);
        let badge = render_badge(variant, &stats,);

        info!("Rendered {:?} badge for agent {}", variant, agent_name);

        Ok(BadgeResponse {
            primary_user: agent_name.to_owned(),
            secondary_user: owner_username.map(str::to_owned,),
            badge,
            stats: StatsPayload {
                primary:   AgentStats {
                    tier:  TierLabel::classify(agent.karma,),
                    agent,
                },
                secondary: owner,
            },
        },)
    }

    async fn owner_section(&self, username: &str,) -> OwnerSection
    {
        match self.fetch_owner(username,).await {
            Ok(stats,) => OwnerSection::Available(stats,),
            Err(error,) => {
                warn!("GitHub lookup for {} failed, rendering social-only badge: {}", username, error);
                OwnerSection::Failed {
                    error: error.to_string(),
                }
            }
        }
    }

    async fn fetch_owner(&self, username: &str,) -> Result<OwnerStats, FetchError,>
    {
        let ProfileRecord {
            username,
            followers,
            public_repos,
        } = self.github.fetch_profile(username,).await?;

        let repositories = match self.github.fetch_repositories(&username,).await {
            Ok(repositories,) => repositories,
            Err(error,) => {
                warn!("Repository listing for {} unavailable: {}", username, error);
                Vec::new()
            }
        };

        Ok(OwnerStats {
            top_language: dominant_language(&repositories,),
            username,
            followers,
            repos: public_repos,
        },)
    }
}
