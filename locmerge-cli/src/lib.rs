//! CLI library for testing purposes

use locmerge::{Error, KeyFilter};

pub mod strings;
pub mod stringsdict;

/// Builds the key filter from the raw `--keys-json` argument. A missing or
/// empty argument means no filtering at all.
pub fn build_filter(keys_json: Option<&str>) -> Result<KeyFilter, Error> {
    match keys_json {
        None | Some("") => Ok(KeyFilter::unrestricted()),
        Some(json) => KeyFilter::from_json(json),
    }
}
