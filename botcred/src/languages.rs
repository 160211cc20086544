// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository language aggregation.
//!
//! Reduces a repository listing to the single language that appears most
//! often, which the badge reports as the owner's stack.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Language reported when no repository carries a language.
pub const POLYGLOT: &str = "Polyglot";

/// Repository summary as returned by the GitHub repository listing.
///
/// Only the primary language is retained; everything else in the upstream
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepositorySummary
{
    /// Primary language detected by GitHub, if any.
    #[serde(default)]
    pub language: Option<String,>,
}

impl RepositorySummary
{
    /// Creates a summary carrying the provided language.
    pub fn with_language(language: impl Into<String,>,) -> Self
    {
        Self {
            language: Some(language.into(),),
        }
    }
}

/// Returns the most frequent non-empty language across `repositories`.
///
/// Ties resolve to the language that was encountered first in input order.
/// When no repository carries a language the [`POLYGLOT`] sentinel is
/// returned.
///
/// # Example
///
/// ```
/// use botcred::{RepositorySummary, dominant_language};
///
/// let repositories = [
///     RepositorySummary::with_language("Go",),
///     RepositorySummary::with_language("Rust",),
///     RepositorySummary::with_language("Go",),
/// ];
/// assert_eq!(dominant_language(&repositories,), "Go");
/// assert_eq!(dominant_language(&[],), "Polyglot");
/// ```
pub fn dominant_language(repositories: &[RepositorySummary],) -> String
{
    let mut order: Vec<&str,> = Vec::new();
    let mut tally: HashMap<&str, usize,> = HashMap::new();

    for language in repositories.iter().filter_map(|repository| repository.language.as_deref(),) {
        if language.is_empty() {
            continue;
        }
        let count = tally.entry(language,).or_insert(0,);
        if *count == 0 {
            order.push(language,);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize,),> = None;
    for language in order {
        let count = tally[language];
        // strict comparison keeps the earliest language on ties
        if best.is_none_or(|(_, best_count,)| count > best_count,) {
            best = Some((language, count,),);
        }
    }

    best.map_or_else(|| POLYGLOT.to_owned(), |(language, _,)| language.to_owned(),)
}
