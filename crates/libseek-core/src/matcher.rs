//! Fuzzy matcher — case-folded, accent-insensitive edit distance with an
//! adaptive cutoff.
//!
//! A field is a candidate only if every character of the query appears in it,
//! in order, after folding. Candidates are then ranked by Levenshtein distance
//! and accepted when the distance is strictly below the cutoff chosen by
//! [`Thresholds::max_distance_for`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Query length (in bytes) at or below which the short-query cutoff applies.
pub const DEFAULT_SHORT_QUERY_LEN: usize = 4;
/// Cutoff for short queries; keeps two-letter queries from matching everything.
pub const DEFAULT_SHORT_QUERY_MAX_DISTANCE: usize = 40;
/// Cutoff for every other query.
pub const DEFAULT_MAX_DISTANCE: usize = 150;

/// The two-tier cutoff policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub short_query_len: usize,
    pub short_query_max_distance: usize,
    pub max_distance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            short_query_len: DEFAULT_SHORT_QUERY_LEN,
            short_query_max_distance: DEFAULT_SHORT_QUERY_MAX_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl Thresholds {
    /// Pick the cutoff for `raw_query`.
    ///
    /// Length is the byte length of the query exactly as the caller sent it,
    /// surrounding whitespace included.
    pub fn max_distance_for(&self, raw_query: &str) -> usize {
        if raw_query.len() <= self.short_query_len {
            self.short_query_max_distance
        } else {
            self.max_distance
        }
    }
}

/// Fold `s` for comparison: strip accents, then lowercase.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

/// Edit distance between `query` and `field` after folding, or `None` when the
/// folded query is not an in-order subsequence of the folded field.
pub fn distance(query: &str, field: &str) -> Option<usize> {
    let query: Vec<char> = fold(query).chars().collect();
    let field: Vec<char> = fold(field).chars().collect();

    if !is_subsequence(&query, &field) {
        return None;
    }
    Some(levenshtein(&query, &field))
}

/// `true` as soon as any field lies strictly within `max_distance` of `query`.
pub fn matches<S: AsRef<str>>(query: &str, fields: &[S], max_distance: usize) -> bool {
    fields
        .iter()
        .any(|field| matches!(distance(query, field.as_ref()), Some(d) if d < max_distance))
}

fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
