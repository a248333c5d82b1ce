//! Mood definitions and history statistics

use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of mood entries kept in history
pub const MOOD_HISTORY_LIMIT: usize = 30;

/// The fixed set of moods a user can log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Amazing,
    Happy,
    Calm,
    Tired,
    Stressed,
    Anxious,
}

impl Mood {
    /// All moods in display order
    pub const ALL: [Mood; 6] = [
        Mood::Amazing,
        Mood::Happy,
        Mood::Calm,
        Mood::Tired,
        Mood::Stressed,
        Mood::Anxious,
    ];

    /// Identifier used in storage and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Mood::Amazing => "amazing",
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Amazing => "Amazing",
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Tired => "Tired",
            Mood::Stressed => "Stressed",
            Mood::Anxious => "Anxious",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Amazing => "🌟",
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Tired => "😴",
            Mood::Stressed => "😓",
            Mood::Anxious => "😰",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Amazing => "Feeling great and at peace",
            Mood::Happy => "Content and comfortable",
            Mood::Calm => "Relaxed and steady",
            Mood::Tired => "Sleepy and low energy",
            Mood::Stressed => "Need to unwind more",
            Mood::Anxious => "Feeling restless",
        }
    }

    /// Amazing, happy and calm count towards the positive share
    pub fn is_positive(&self) -> bool {
        matches!(self, Mood::Amazing | Mood::Happy | Mood::Calm)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.id() == wanted)
            .ok_or_else(|| s.to_string())
    }
}

/// One logged mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(mood: Mood, note: String, timestamp: DateTime<Utc>) -> Self {
        MoodEntry {
            mood,
            note,
            timestamp,
        }
    }
}

// Mood entries carry no explicit id; creation time identifies them.
impl Record for MoodEntry {
    type Id = DateTime<Utc>;

    fn id(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Summary of a mood history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStats {
    pub count: usize,
    /// Share of positive moods, rounded to a whole percent
    pub positive_percent: u32,
    /// Mood of the newest entry
    pub current: Option<Mood>,
}

impl MoodStats {
    /// Compute stats over a newest-first history
    pub fn from_history(history: &[MoodEntry]) -> Self {
        let count = history.len();
        let positive = history.iter().filter(|e| e.mood.is_positive()).count();
        let positive_percent = if count == 0 {
            0
        } else {
            ((positive as f64 / count as f64) * 100.0).round() as u32
        };

        MoodStats {
            count,
            positive_percent,
            current: history.first().map(|e| e.mood),
        }
    }
}
