//! Requester list parsing.

use std::collections::HashSet;

/// Split a free-form requester string into logins/emails.
///
/// Entries are separated by commas, semicolons or any whitespace, trimmed,
/// and deduplicated case-insensitively keeping the first spelling seen.
pub fn parse_requesters(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .map(str::to_string)
        .collect()
}
