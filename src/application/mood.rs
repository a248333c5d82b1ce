//! Mood tracking use cases

use crate::domain::{Mood, MoodEntry, MoodStats, MOOD_HISTORY_LIMIT};
use crate::error::Result;
use crate::infrastructure::{RecordStore, SlotStorage};
use chrono::{Duration, Utc};
use log::info;

/// Slot holding mood history
pub const MOOD_SLOT: &str = "moods";

/// Number of moods shown by default in the history view
pub const RECENT_MOODS: usize = 10;

/// Service for logging moods and summarising the history
pub struct MoodService<S: SlotStorage> {
    store: RecordStore<MoodEntry, S>,
}

impl<S: SlotStorage> MoodService<S> {
    pub fn new(storage: S) -> Self {
        MoodService {
            store: RecordStore::open(storage, MOOD_SLOT),
        }
    }

    /// Record a mood. History keeps only the newest 30 entries.
    pub fn log(&mut self, mood: Mood, note: Option<&str>) -> Result<MoodEntry> {
        let mut timestamp = Utc::now();
        // Timestamps identify mood entries, so keep them distinct
        if let Some(newest) = self.store.records().first() {
            if timestamp <= newest.timestamp {
                timestamp = newest.timestamp + Duration::milliseconds(1);
            }
        }

        let entry = MoodEntry::new(mood, note.unwrap_or_default().to_string(), timestamp);
        self.store.prepend_capped(entry.clone(), MOOD_HISTORY_LIMIT)?;

        info!("Logged mood '{}'", mood.id());
        Ok(entry)
    }

    /// Full history, newest first
    pub fn entries(&self) -> &[MoodEntry] {
        self.store.records()
    }

    /// The newest `limit` entries
    pub fn history(&self, limit: usize) -> &[MoodEntry] {
        let records = self.store.records();
        &records[..limit.min(records.len())]
    }

    pub fn stats(&self) -> MoodStats {
        MoodStats::from_history(self.store.records())
    }
}
