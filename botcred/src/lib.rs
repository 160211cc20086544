// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Verified skill badges for Moltbook agents.
//!
//! The service looks up a Moltbook agent, optionally enriches it with the
//! public GitHub statistics of the agent's owner, and renders the result as a
//! fixed-width text badge alongside the raw numbers. The building blocks are
//! exposed individually so they can be exercised without the HTTP layer:
//! [`dominant_language`] and [`TierLabel::classify`] are pure, and
//! [`render_badge`] never fails on resolved input.

mod badge;
mod config;
mod error;
mod github;
mod languages;
mod moltbook;
mod orchestrator;
mod server;
mod tier;

pub use badge::{BadgeStats, BadgeVariant, render_badge};
pub use config::{
    DEFAULT_BIND_ADDRESS, DEFAULT_GITHUB_API_URL, DEFAULT_MOLTBOOK_API_URL, ServiceArgs,
    ServiceConfig,
};
pub use error::{Error, FetchError, io_error};
pub use github::{GitHubClient, ProfileRecord};
pub use languages::{POLYGLOT, RepositorySummary, dominant_language};
pub use moltbook::{AgentRecord, DESCRIPTION_EXCERPT_CHARS, MoltbookClient, excerpt};
pub use orchestrator::{AgentStats, BadgeResponse, BadgeService, OwnerSection, OwnerStats, StatsPayload};
pub use server::{BadgeQuery, badge_service, router, serve};
pub use tier::TierLabel;
