//! The localization file formats locmerge can merge.
//!
//! Each submodule owns the policy for one format: [`strings`] for the flat
//! line-oriented `.strings` format, [`stringsdict`] for the plural-rule
//! plist format. Both expose a `merge` entry point plus the parse/read
//! helpers the CLI builds on.

pub mod strings;
pub mod stringsdict;
