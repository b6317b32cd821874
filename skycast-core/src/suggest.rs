//! Tiered autocomplete ranking over the static city lists.
//!
//! The ranking cheaply approximates relevance without fuzzy-matching cost:
//! exact matches first, then entries from the curated major list, then
//! prefix and substring matches from the larger popular list. Tie-breaks
//! within a tier follow original list order.

use crate::cities::{MAJOR_CITIES, POPULAR_CITIES};

/// Maximum number of suggestions returned for any query.
pub const MAX_SUGGESTIONS: usize = 8;

const MAJOR_CAP: usize = 5;
const STARTS_WITH_CAP: usize = 5;
const CONTAINS_CAP: usize = 3;

/// Rank city suggestions for a free-text query.
///
/// Queries shorter than two characters (after trimming) yield no
/// suggestions. Matching is case-insensitive with plain `to_lowercase`
/// folding; no Unicode normalization is applied, so a query must spell
/// accented names the way the list does.
pub fn rank(query: &str, major: &[&str], popular: &[&str]) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < 2 {
        return Vec::new();
    }

    let mut exact: Vec<&str> = Vec::new();
    // Starts-with and contains matches from the major list share one
    // bucket, in list order.
    let mut major_match: Vec<&str> = Vec::new();
    let mut starts_with: Vec<&str> = Vec::new();
    let mut contains: Vec<&str> = Vec::new();

    for &city in major {
        let lower = city.to_lowercase();
        if lower == needle {
            exact.push(city);
        } else if lower.starts_with(&needle) || lower.contains(&needle) {
            major_match.push(city);
        }
    }

    for &city in popular {
        // A city present in both lists keeps its major-tier placement.
        if exact.contains(&city) || major_match.contains(&city) {
            continue;
        }
        let lower = city.to_lowercase();
        if lower == needle {
            exact.push(city);
        } else if lower.starts_with(&needle) {
            starts_with.push(city);
        } else if lower.contains(&needle) {
            contains.push(city);
        }
    }

    let mut results: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    results.extend(exact.iter().map(|c| c.to_string()));
    results.extend(major_match.iter().take(MAJOR_CAP).map(|c| c.to_string()));
    results.extend(
        starts_with
            .iter()
            .take(STARTS_WITH_CAP)
            .map(|c| c.to_string()),
    );
    results.extend(contains.iter().take(CONTAINS_CAP).map(|c| c.to_string()));

    results.truncate(MAX_SUGGESTIONS);
    results
}

/// Rank against the built-in city lists.
pub fn suggest(query: &str) -> Vec<String> {
    rank(query, MAJOR_CITIES, POPULAR_CITIES)
}
