// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Fixed-width text badge rendering.
//!
//! Badges are drawn inside a rounded box. Every content row holds 24
//! characters between the vertical borders: a label prefix followed by a
//! left-justified slot of fixed width. Values longer than their slot are
//! truncated so the right border never moves.
//!
//! Two templates exist. [`BadgeVariant::Hybrid`] is used when the agent's
//! owner has a GitHub account attached to the request and shows the owner's
//! repository count next to the agent karma. [`BadgeVariant::SocialOnly`]
//! shows the agent's own numbers together with its karma tier.

use std::{borrow::Cow, fmt::Write as _};

use crate::tier::TierLabel;

const TOP_BORDER: &str = "╭─────────────────────────╮";
const BOTTOM_BORDER: &str = "╰─────────────────────────╯";
const VERIFIED_OWNER_ROW: &str = "│  ✅ VERIFIED OWNER      │";

const NAME_WIDTH: usize = 14;
const KARMA_WIDTH: usize = 13;
const FOLLOWERS_WIDTH: usize = 14;
const REPOS_WIDTH: usize = 13;
const STATUS_WIDTH: usize = 12;

/// Template selected for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum BadgeVariant
{
    /// Agent numbers only, with the karma tier.
    SocialOnly,
    /// Agent karma combined with the owner's GitHub repository count.
    Hybrid,
}

impl BadgeVariant
{
    /// Selects the template for the provided stats.
    ///
    /// [`BadgeVariant::Hybrid`] is chosen exactly when an owner repository
    /// count is available.
    pub fn select(stats: &BadgeStats<'_,>,) -> Self
    {
        if stats.owner_repositories.is_some() { Self::Hybrid } else { Self::SocialOnly }
    }
}

/// Fully resolved values interpolated into a badge template.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct BadgeStats<'a,>
{
    /// Agent display name.
    pub agent_name:         &'a str,
    /// Agent karma score.
    pub karma:              i64,
    /// Number of accounts following the agent.
    pub followers:          u64,
    /// Public repository count of the owner's GitHub account, when fetched.
    pub owner_repositories: Option<u64,>,
}

/// Renders the badge text for `stats` using the requested template.
///
/// The output has no trailing newline. A [`BadgeVariant::Hybrid`] render
/// without an owner repository count shows zero repositories.
///
/// # Example
///
/// ```
/// use botcred::{BadgeStats, BadgeVariant, render_badge};
///
/// let stats = BadgeStats {
///     agent_name:         "alice",
///     karma:              75,
///     followers:          3,
///     owner_repositories: None,
/// };
/// let badge = render_badge(BadgeVariant::select(&stats,), &stats,);
/// assert!(badge.contains("Established"));
/// ```
pub fn render_badge(variant: BadgeVariant, stats: &BadgeStats<'_,>,) -> String
{
    let mut buffer = String::with_capacity(256,);
    let name = fit(stats.agent_name, NAME_WIDTH,);

    let _ = writeln!(buffer, "{TOP_BORDER}");
    match variant {
        BadgeVariant::SocialOnly => {
            let tier = TierLabel::classify(stats.karma,);
            let karma = stats.karma.to_string();
            let karma = fit(&karma, KARMA_WIDTH,);
            let followers = stats.followers.to_string();
            let followers = fit(&followers, FOLLOWERS_WIDTH,);
            let _ = writeln!(buffer, "│  🤖 Name: {name:<NAME_WIDTH$}│");
            let _ = writeln!(buffer, "│  ⚡ Karma: {karma:<KARMA_WIDTH$}│");
            let _ = writeln!(buffer, "│  👥 Foll: {followers:<FOLLOWERS_WIDTH$}│");
            let _ = writeln!(buffer, "│  🏆 Status: {tier:<STATUS_WIDTH$}│");
        }
        BadgeVariant::Hybrid => {
            let repositories = format!("{} Repos", stats.owner_repositories.unwrap_or(0,));
            let repositories = fit(&repositories, REPOS_WIDTH,);
            let karma = stats.karma.to_string();
            let karma = fit(&karma, KARMA_WIDTH,);
            let _ = writeln!(buffer, "{VERIFIED_OWNER_ROW}");
            let _ = writeln!(buffer, "│  🤖 Name: {name:<NAME_WIDTH$}│");
            let _ = writeln!(buffer, "│  📦 Repos: {repositories:<REPOS_WIDTH$}│");
            let _ = writeln!(buffer, "│  ⚡ Karma: {karma:<KARMA_WIDTH$}│");
        }
    }
    buffer.push_str(BOTTOM_BORDER,);

    buffer
}

/// Truncates `value` to at most `width` characters.
fn fit(value: &str, width: usize,) -> Cow<'_, str,>
{
    match value.char_indices().nth(width,) {
        Some((cut, _,),) => Cow::Borrowed(&value[..cut],),
        None => Cow::Borrowed(value,),
    }
}
