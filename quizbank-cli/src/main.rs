//! quizbank CLI
//!
//! Command-line interface for importing, deduplicating, and reporting on
//! trivia question files.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;
mod error;

use commands::categories::run_categories;
use commands::export::run_export;
use commands::import::run_import;
use commands::report::run_report;
use commands::stats::run_stats;
use error::CliError;

#[derive(Parser)]
#[command(name = "quizbank")]
#[command(about = "Import, deduplicate, and report on trivia question files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common argument for commands that touch the question database.
#[derive(Args, Clone)]
struct DbArgs {
    /// Path to the question database (defaults to the user data directory)
    #[arg(long)]
    db: Option<PathBuf>,
}

/// Common filters for export.
#[derive(Args, Clone)]
struct FilterArgs {
    /// Category name or alias
    #[arg(short, long)]
    category: Option<String>,

    /// Difficulty: easy, medium, or hard
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Source label
    #[arg(short, long)]
    source: Option<String>,

    /// Maximum number of questions
    #[arg(short, long)]
    limit: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import question files (game-data or raw shape) into the store
    Import {
        /// Files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Count would-be imports and duplicates without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Build a statistical report from the store or directly from files
    Report {
        /// Report on these files instead of the store
        #[arg(long, value_delimiter = ',')]
        files: Vec<PathBuf>,

        /// Render a single section: summary, categories, sources,
        /// difficulty, hints, question-length, answer-stats
        #[arg(long)]
        section: Option<String>,

        /// Emit JSON instead of text tables
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Export stored questions back to either input shape
    Export {
        /// Output shape: gamedata or raw
        #[arg(long, default_value = "raw")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        db: DbArgs,
    },

    /// List categories with question counts
    Categories {
        /// List alias → category mappings instead
        #[arg(long)]
        aliases: bool,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Show aggregate store statistics
    Stats {
        #[command(flatten)]
        db: DbArgs,
    },
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { files, dry_run, db } => run_import(files, dry_run, db.db),
        Commands::Report {
            files,
            section,
            json,
            db,
        } => run_report(files, section, json, db.db),
        Commands::Export {
            format,
            output,
            filters,
            db,
        } => run_export(format, output, filters, db.db),
        Commands::Categories { aliases, db } => run_categories(aliases, db.db),
        Commands::Stats { db } => run_stats(db.db),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Bare-message logger; `log::info!` is the CLI's output channel.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
