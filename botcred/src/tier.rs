// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Karma tiers shown on social-only badges.
//!
//! Thresholds cascade: each one overrides the previous label when the karma
//! strictly exceeds it, so the resulting label is the highest threshold the
//! score clears.

use serde::{Serialize, Serializer};

/// Ordered tier labels derived from an agent's karma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,)]
pub enum TierLabel
{
    /// Karma of 10 or less.
    Newcomer,
    /// Karma above 10.
    RisingStar,
    /// Karma above 50.
    Established,
    /// Karma above 100.
    HighImpact,
    /// Karma above 500.
    Legendary,
}

/// Lower bounds (exclusive) paired with the label they unlock.
const THRESHOLDS: [(i64, TierLabel,); 4] = [
    (10, TierLabel::RisingStar,),
    (50, TierLabel::Established,),
    (100, TierLabel::HighImpact,),
    (500, TierLabel::Legendary,),
];

impl TierLabel
{
    /// Classifies a karma score.
    ///
    /// # Example
    ///
    /// ```
    /// use botcred::TierLabel;
    ///
    /// assert_eq!(TierLabel::classify(10,), TierLabel::Newcomer);
    /// assert_eq!(TierLabel::classify(75,), TierLabel::Established);
    /// assert_eq!(TierLabel::classify(501,), TierLabel::Legendary);
    /// ```
    pub fn classify(karma: i64,) -> Self
    {
        let mut label = Self::Newcomer;
        for (threshold, candidate,) in THRESHOLDS {
            if karma > threshold {
                label = candidate;
            }
        }
        label
    }

    /// Human readable label rendered on the badge.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::Newcomer => "Newcomer",
            Self::RisingStar => "Rising Star",
            Self::Established => "Established",
            Self::HighImpact => "High Impact",
            Self::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for TierLabel
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        // `pad` keeps width and alignment flags working inside templates.
        f.pad(self.as_str(),)
    }
}

impl Serialize for TierLabel
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str(),)
    }
}
