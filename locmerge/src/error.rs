//! All error types for the locmerge crate.
//!
//! These are returned from all fallible operations (file I/O, plist
//! decoding, key-filter parsing). Unparseable lines in the flat `.strings`
//! format are not errors; the parser skips them by design.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),
}
