//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, JournalCommand, MoodCommand, TimerCommand, TimerRunArgs};
pub use output::{
    format_journal_entry, format_journal_list, format_mood_choices, format_mood_history,
    format_mood_stats, format_presets, format_timer_line,
};
