//! The `strings` subcommand: merge flat `.strings` keys into a target file.

use std::fs;
use std::path::Path;

use locmerge::Error;
use locmerge::encoding::{self, TextEncoding};
use locmerge::formats::strings;

use crate::build_filter;

/// Run the strings merge command end to end. The target file is only
/// opened for writing once the merged document is fully built.
pub fn run_strings_command(
    source: &str,
    target: &str,
    keys_json: Option<&str>,
    dry_run: bool,
    backup: bool,
) -> Result<(), Error> {
    let filter = build_filter(keys_json)?;

    let (source_text, _) = encoding::read_file(source)?;
    let mut source_pairs = strings::parse_pairs(&source_text);
    source_pairs.retain(|pair| filter.matches(&pair.key));

    if source_pairs.is_empty() {
        println!("[INFO]  No matching keys found in source");
        return Ok(());
    }

    let unique = strings::dedup_keys(&source_pairs);

    if dry_run {
        println!(
            "[INFO]  [DRY RUN] Would merge {} key(s) into {}:",
            unique.len(),
            target
        );
        for pair in &unique {
            println!("  {}", pair);
        }
        return Ok(());
    }

    let target_path = Path::new(target);
    if backup && target_path.exists() {
        fs::copy(target_path, format!("{target}.bak"))?;
    }

    let (target_text, target_encoding) = if target_path.exists() {
        encoding::read_file(target_path)?
    } else {
        (String::new(), TextEncoding::Utf8)
    };

    let merged = strings::merge(&source_pairs, &target_text);
    encoding::write_file(target_path, &merged.text, target_encoding)?;

    println!(
        "[OK]    Merged {} key(s) into {} ({} new, {} updated)",
        merged.summary.total(),
        target,
        merged.summary.added,
        merged.summary.updated
    );
    Ok(())
}
