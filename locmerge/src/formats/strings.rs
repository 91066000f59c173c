//! Merge support for the flat Apple `.strings` localization format.
//!
//! The format is line-oriented: a recognized line is a complete
//! `"key" = "value";` pair, and every other line (comments, blank lines,
//! anything malformed) is opaque text that passes through a merge
//! untouched and in place.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::MergeSummary;

lazy_static! {
    // One full key-value pair per line; escaped quotes and backslashes stay
    // inside the captures unprocessed.
    static ref LINE_PATTERN: Regex =
        Regex::new(r#"^\s*"((?:[^"\\]|\\.)*)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;\s*$"#).unwrap();
}

/// A single key-value pair from a `.strings` file.
///
/// Both fields hold the raw captured text: escape sequences such as `\"`
/// or `\n` are carried through verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The key for this localization entry.
    pub key: String,
    /// The translated value for this localization entry.
    pub value: String,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", canonical(&self.key, &self.value))
    }
}

/// The `"KEY" = "VALUE";` rendering used for every replaced or inserted
/// line. Untouched lines keep their original spelling instead.
fn canonical(key: &str, value: &str) -> String {
    format!("\"{key}\" = \"{value}\";")
}

/// One line of a target document, classified by the line grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line the grammar does not recognize, preserved byte-for-byte.
    Opaque(String),
    /// A recognized key-value line, with its original text.
    Recognized { key: String, raw: String },
}

impl Line {
    /// Classifies a single line (without its terminator).
    pub fn classify(raw: &str) -> Line {
        match LINE_PATTERN.captures(raw) {
            Some(caps) => Line::Recognized {
                key: caps[1].to_string(),
                raw: raw.to_string(),
            },
            None => Line::Opaque(raw.to_string()),
        }
    }
}

/// Extracts all recognized key-value pairs from `text`, in file order.
///
/// Unrecognized lines are skipped silently; duplicate keys are kept as-is
/// and resolved later by [`dedup_keys`].
pub fn parse_pairs(text: &str) -> Vec<Pair> {
    text.lines()
        .filter_map(|line| {
            LINE_PATTERN.captures(line).map(|caps| Pair {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
            })
        })
        .collect()
}

/// Collapses duplicate keys: one pair per key, in order of first
/// appearance, carrying the last value seen for that key.
pub fn dedup_keys(pairs: &[Pair]) -> Vec<Pair> {
    let mut unique: Vec<Pair> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    for pair in pairs {
        match index_of.get(&pair.key) {
            Some(&at) => unique[at].value = pair.value.clone(),
            None => {
                index_of.insert(pair.key.clone(), unique.len());
                unique.push(pair.clone());
            }
        }
    }
    unique
}

/// The outcome of a flat merge: the full new document text plus counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// The complete merged document, `\n`-separated with a trailing
    /// newline when any line exists. CRLF line endings in the input are
    /// normalized away.
    pub text: String,
    /// How many source keys were inserted vs. replaced.
    pub summary: MergeSummary,
}

/// Merges `source` pairs into the flat document `target_text`.
///
/// Keys already present in the target are replaced in place with their
/// canonical rendering; every other key is inserted at its alphabetical
/// position among the target's recognized keys, assuming those keys are
/// sorted. Unsorted targets are not rejected: the binary search still
/// yields a deterministic position, it just may not look alphabetical.
/// Opaque lines never move relative to the recognized lines around them.
pub fn merge(source: &[Pair], target_text: &str) -> Merged {
    let source = dedup_keys(source);
    let source_map: HashMap<&str, &str> = source
        .iter()
        .map(|pair| (pair.key.as_str(), pair.value.as_str()))
        .collect();

    // Pass 1: replace matching keys in place, remembering where every
    // recognized key sits in the output.
    let mut updated_keys: HashSet<String> = HashSet::new();
    let mut lines: Vec<String> = Vec::new();
    let mut key_at_index: Vec<(usize, String)> = Vec::new();

    for raw in target_text.lines() {
        match Line::classify(raw) {
            Line::Recognized { key, raw } => {
                match source_map.get(key.as_str()) {
                    Some(value) => {
                        lines.push(canonical(&key, value));
                        updated_keys.insert(key.clone());
                    }
                    None => lines.push(raw),
                }
                key_at_index.push((lines.len() - 1, key));
            }
            Line::Opaque(raw) => lines.push(raw),
        }
    }

    // Pass 2: binary-search an anchor line for each remaining key. A key
    // greater than every existing key goes right after the last recognized
    // line, so trailing comment blocks stay at the bottom of the file.
    let new_pairs: Vec<&Pair> = source
        .iter()
        .filter(|pair| !updated_keys.contains(&pair.key))
        .collect();
    let added = new_pairs.len();
    let updated = updated_keys.len();

    if !new_pairs.is_empty() {
        let existing_keys: Vec<&str> = key_at_index
            .iter()
            .map(|(_, key)| key.as_str())
            .collect();

        let mut insertions: Vec<(usize, String)> = Vec::with_capacity(new_pairs.len());
        for pair in new_pairs {
            let pos = existing_keys.partition_point(|existing| *existing < pair.key.as_str());
            let insert_at = if pos < key_at_index.len() {
                key_at_index[pos].0
            } else if let Some((last, _)) = key_at_index.last() {
                last + 1
            } else {
                lines.len()
            };
            insertions.push((insert_at, canonical(&pair.key, &pair.value)));
        }

        // All anchors refer to pre-insertion indices. Applying from the
        // highest index down keeps the lower anchors valid, and the stable
        // ascending sort keeps keys sharing an anchor in source order.
        insertions.sort_by_key(|(at, _)| *at);
        for (at, line) in insertions.into_iter().rev() {
            lines.insert(at, line);
        }
    }

    let mut text = lines.join("\n");
    if !lines.is_empty() {
        text.push('\n');
    }

    Merged {
        text,
        summary: MergeSummary { added, updated },
    }
}
