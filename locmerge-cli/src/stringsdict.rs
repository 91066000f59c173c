//! The `stringsdict` subcommand: merge plural-rule plist keys into a
//! target file.

use std::fs;
use std::path::Path;

use locmerge::Error;
use locmerge::formats::stringsdict::{self, Dictionary};

use crate::build_filter;

/// Run the stringsdict merge command end to end.
pub fn run_stringsdict_command(
    source: &str,
    target: &str,
    keys_json: Option<&str>,
    dry_run: bool,
    backup: bool,
) -> Result<(), Error> {
    let filter = build_filter(keys_json)?;

    let source_data = stringsdict::read_dictionary(source)?;
    let filtered = stringsdict::filter_keys(&source_data, &filter);

    if filtered.is_empty() {
        println!("[INFO]  No matching stringsdict keys found in source");
        return Ok(());
    }

    if dry_run {
        println!(
            "[INFO]  [DRY RUN] Would merge {} stringsdict key(s) into {}:",
            filtered.len(),
            target
        );
        for key in filtered.keys() {
            println!("  {}", key);
        }
        return Ok(());
    }

    let target_path = Path::new(target);
    if backup && target_path.exists() {
        fs::copy(target_path, format!("{target}.bak"))?;
    }

    let mut target_data = if target_path.exists() {
        stringsdict::read_dictionary(target_path)?
    } else {
        Dictionary::new()
    };

    let summary = stringsdict::merge(&filtered, &mut target_data);
    stringsdict::write_dictionary(target_path, &target_data)?;

    println!(
        "[OK]    Merged {} stringsdict key(s) into {} ({} new, {} updated)",
        summary.total(),
        target,
        summary.added,
        summary.updated
    );
    Ok(())
}
