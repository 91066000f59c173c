use clap::{Parser, Subcommand};
use locmerge_cli::{strings, stringsdict};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge translated keys into a flat `.strings` file.
    Strings {
        /// The translated file to merge keys from
        source: String,
        /// The localization file to merge keys into
        target: String,
        /// JSON array of glob patterns selecting which source keys to merge
        #[arg(long)]
        keys_json: Option<String>,
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Copy an existing target to TARGET.bak before writing
        #[arg(long)]
        backup: bool,
    },

    /// Merge translated plural rules into a `.stringsdict` file.
    Stringsdict {
        /// The translated file to merge keys from
        source: String,
        /// The localization file to merge keys into
        target: String,
        /// JSON array of glob patterns selecting which source keys to merge
        #[arg(long)]
        keys_json: Option<String>,
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Copy an existing target to TARGET.bak before writing
        #[arg(long)]
        backup: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Strings {
            source,
            target,
            keys_json,
            dry_run,
            backup,
        } => strings::run_strings_command(&source, &target, keys_json.as_deref(), dry_run, backup),
        Commands::Stringsdict {
            source,
            target,
            keys_json,
            dry_run,
            backup,
        } => stringsdict::run_stringsdict_command(
            &source,
            &target,
            keys_json.as_deref(),
            dry_run,
            backup,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
