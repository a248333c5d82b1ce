//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lounge")]
#[command(about = "A lazy lounge for your terminal: journal, mood tracker and relaxation timer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new lounge
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write, edit and browse journal entries
    #[command(subcommand)]
    Journal(JournalCommand),

    /// Log how you feel and look back on it
    #[command(subcommand)]
    Mood(MoodCommand),

    /// Relaxation countdown timer
    #[command(subcommand)]
    Timer(TimerCommand),
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// Save a new entry
    Add {
        /// Entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace the text of an existing entry
    Edit {
        /// Entry id
        id: u64,

        /// New text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete an entry
    #[command(alias = "delete")]
    Rm {
        /// Entry id
        id: u64,
    },

    /// List entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long, value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: u64,
    },

    /// Print a writing prompt
    Prompt,
}

#[derive(Subcommand, Debug)]
pub enum MoodCommand {
    /// Log a mood (amazing, happy, calm, tired, stressed, anxious)
    Log {
        mood: String,

        /// Optional note about how you feel
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show recent moods
    History {
        /// Maximum number of moods to show
        #[arg(short = 'n', long, default_value_t = 10, value_parser = parse_limit)]
        limit: usize,
    },

    /// Summary of your mood history
    Stats,

    /// List the moods you can log
    ListMoods,
}

#[derive(Subcommand, Debug)]
pub enum TimerCommand {
    /// List the built-in presets
    Presets,

    /// Count down and chime when done
    Run(TimerRunArgs),
}

#[derive(Args, Debug)]
pub struct TimerRunArgs {
    /// Preset to use (quick-break, lazy-session, deep-relax, power-nap)
    #[arg(short, long, conflicts_with_all = ["minutes", "seconds"])]
    pub preset: Option<String>,

    /// Custom duration in minutes (1-120)
    #[arg(short, long, conflicts_with = "seconds")]
    pub minutes: Option<u32>,

    /// Exact duration in seconds
    #[arg(long, hide = true)]
    pub seconds: Option<u32>,

    /// Milliseconds between ticks
    #[arg(long, hide = true)]
    pub tick_ms: Option<u64>,

    /// Skip the completion chime
    #[arg(long)]
    pub mute: bool,
}

/// Listing limits count entries to show, so zero is meaningless
fn parse_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if limit == 0 {
        return Err("limit must be at least 1".to_string());
    }
    Ok(limit)
}
