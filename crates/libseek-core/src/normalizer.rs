//! Normalizer — derives the secondary "cleaned" query variant.
//!
//! Library names are written inconsistently (`WiFi101`, `wi-fi_101`, ...), so
//! the search runs a second pass with separator noise removed.

/// Characters stripped from a query to form its cleaned variant.
pub const NOISE_CHARS: [char; 3] = ['_', '-', ' '];

/// Remove every `_`, `-` and ASCII space from `query`.
///
/// All other characters, including non-ASCII whitespace, are kept in order.
pub fn clean_query(query: &str) -> String {
    query.chars().filter(|c| !NOISE_CHARS.contains(c)).collect()
}
