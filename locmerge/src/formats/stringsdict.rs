//! Merge support for the Apple `.stringsdict` plural-rule format.
//!
//! A `.stringsdict` file is a property list whose root is a dictionary
//! mapping localization keys to plural/format-rule sub-dictionaries.
//! Merging treats those sub-dictionaries as atomic values: a source key
//! replaces the target's entry wholesale, never field by field. The plist
//! codec reads both XML and binary files; output is always XML, so comments
//! and whitespace in the target are not preserved.

use std::fs;
use std::path::Path;

// Reexporting the plist value types so callers can build and inspect
// dictionaries without importing the codec crate themselves.
pub use plist::{Dictionary, Value};

use crate::{error::Error, filter::KeyFilter, types::MergeSummary};

/// Reads a plist file (XML or binary) whose root must be a dictionary.
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, Error> {
    Value::from_file(path)?
        .into_dictionary()
        .ok_or_else(|| Error::DataMismatch("root of plist is not a dictionary".to_string()))
}

/// Writes `dict` to `path` as an XML plist, creating missing parent
/// directories first.
pub fn write_dictionary<P: AsRef<Path>>(path: P, dict: &Dictionary) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Value::Dictionary(dict.clone()).to_file_xml(path)?;
    Ok(())
}

/// Returns the subset of `dict` whose top-level keys survive `filter`,
/// preserving the original key order.
pub fn filter_keys(dict: &Dictionary, filter: &KeyFilter) -> Dictionary {
    let mut kept = Dictionary::new();
    for (key, value) in dict {
        if filter.matches(key) {
            kept.insert(key.clone(), value.clone());
        }
    }
    kept
}

/// Merges every `source` entry into `target`, overwriting existing keys
/// wholesale.
pub fn merge(source: &Dictionary, target: &mut Dictionary) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for (key, value) in source {
        if target.contains_key(key) {
            summary.updated += 1;
        } else {
            summary.added += 1;
        }
        target.insert(key.clone(), value.clone());
    }
    summary
}
