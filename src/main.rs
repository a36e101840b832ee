use clap::{Parser, Subcommand};
use git_deck::commands::*;
use git_deck::core::{error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "git-deck")]
#[command(about = "Numbered git status with a persistent selection, plus merge and conflict checks")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show numbered git status and remember it for selection commands
    Status,
    /// Toggle the checked flag of files by index
    Toggle {
        /// File indices to toggle (e.g., "1 3-5,8")
        indices: Vec<String>,
    },
    /// Make one file the active file
    Activate {
        /// File index as shown by status
        index: usize,
    },
    /// Clear the active file
    ClearActive,
    /// Check every file
    CheckAll,
    /// Uncheck every file
    UncheckAll,
    /// List the files changed by a commit
    Show {
        /// Commit to inspect
        #[arg(default_value = "HEAD")]
        commit: String,
    },
    /// Preview a merge without touching the working tree
    MergeCheck {
        /// Branch or commit to merge
        theirs: String,
        /// Branch or commit to merge into (defaults to HEAD)
        #[arg(long = "into")]
        ours: Option<String>,
    },
    /// List files with leftover conflict markers
    DiffCheck {
        /// Check the index instead of the working tree
        #[arg(long)]
        cached: bool,
    },
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Status => execute_status(),
        Commands::Toggle { indices } => execute_toggle(indices),
        Commands::Activate { index } => execute_activate(index),
        Commands::ClearActive => execute_clear_active(),
        Commands::CheckAll => execute_check_all(),
        Commands::UncheckAll => execute_uncheck_all(),
        Commands::Show { commit } => execute_show(&commit),
        Commands::MergeCheck { theirs, ours } => execute_merge_check(&theirs, ours.as_deref()),
        Commands::DiffCheck { cached } => execute_diff_check(cached),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
