//! Domain layer - Business logic and domain models

pub mod journal;
pub mod mood;
pub mod prompts;
pub mod record;
pub mod timer;

pub use journal::JournalEntry;
pub use mood::{Mood, MoodEntry, MoodStats, MOOD_HISTORY_LIMIT};
pub use record::Record;
pub use timer::{CountdownTimer, TimerEvent, TimerPreset, TimerStatus};
