#![forbid(unsafe_code)]
//! Merge translated localization keys into Apple resource files.
//!
//! Takes key-value pairs delivered by a translation pipeline and folds them
//! into an existing `.strings` or `.stringsdict` file: existing keys are
//! updated in place, new keys are inserted at their alphabetical position,
//! and every line the merge does not own (comments, blank lines, unrelated
//! keys) is preserved byte-for-byte.
//!
//! # Quick Start
//!
//! ```rust
//! use locmerge::formats::strings;
//!
//! let source = strings::parse_pairs("\"bravo\" = \"2\";\n");
//! let merged = strings::merge(&source, "\"alpha\" = \"1\";\n\"charlie\" = \"3\";\n");
//!
//! assert_eq!(merged.summary.added, 1);
//! assert_eq!(
//!     merged.text,
//!     "\"alpha\" = \"1\";\n\"bravo\" = \"2\";\n\"charlie\" = \"3\";\n"
//! );
//! ```
//!
//! # Features
//!
//! - ✨ Format-preserving merges: untouched lines, comments, and key order
//!   survive exactly as they were
//! - 🔤 Automatic UTF-8 / UTF-16 detection, with the target's encoding
//!   preserved on write
//! - 🎯 Glob key filters (`menu.*`) to merge only a subset of the source
//! - 📦 Designed for CLI tools and CI/CD localization pipelines

pub mod encoding;
pub mod error;
pub mod filter;
pub mod formats;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    encoding::TextEncoding, error::Error, filter::KeyFilter, types::MergeSummary,
};
