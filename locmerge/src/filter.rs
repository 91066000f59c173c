//! Glob-style key filtering.
//!
//! Localization keys are opaque identifier strings, not filesystem paths,
//! so this is a small standalone matcher rather than a path glob: `*`
//! matches any run of characters (including none), `?` matches exactly one
//! character, and everything else is literal.

use crate::error::Error;

/// Returns true if `key` matches the glob `pattern`.
///
/// Classic iterative wildcard matching with single-star backtracking;
/// worst case O(pattern × key), which is irrelevant at key sizes.
pub fn matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let mut p = 0;
    let mut k = 0;
    // Position of the most recent `*` and the key index it is currently
    // assumed to cover up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == key[k]) {
            p += 1;
            k += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, k));
            p += 1;
        } else if let Some((star_p, star_k)) = backtrack {
            // Let the previous `*` swallow one more character and retry.
            p = star_p + 1;
            k = star_k + 1;
            backtrack = Some((star_p, star_k + 1));
        } else {
            return false;
        }
    }

    // Trailing stars match the empty remainder.
    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

/// A set of glob patterns restricting which source keys take part in a
/// merge.
///
/// With no patterns the filter is an identity pass. With patterns, a key is
/// kept if at least one pattern matches it — so an explicitly empty pattern
/// list keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    patterns: Option<Vec<String>>,
}

impl KeyFilter {
    /// A filter that keeps every key.
    pub fn unrestricted() -> Self {
        KeyFilter { patterns: None }
    }

    /// Build a filter from an explicit pattern list.
    pub fn new(patterns: Vec<String>) -> Self {
        KeyFilter {
            patterns: Some(patterns),
        }
    }

    /// Parse a filter from a JSON array of pattern strings, e.g.
    /// `["menu.*", "settings.title"]`. Invalid JSON is a fatal error.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let patterns: Vec<String> = serde_json::from_str(json)?;
        Ok(KeyFilter::new(patterns))
    }

    /// Whether `key` survives the filter.
    pub fn matches(&self, key: &str) -> bool {
        match &self.patterns {
            None => true,
            Some(patterns) => patterns.iter().any(|pattern| matches(pattern, key)),
        }
    }
}
