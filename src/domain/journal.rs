//! Journal entries

use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single free-form journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry stamped with `now` for both timestamps
    pub fn new(id: u64, text: String, now: DateTime<Utc>) -> Self {
        JournalEntry {
            id,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the text, keeping identity and creation time.
    /// `updated_at` never moves backwards even if the clock does.
    pub fn revise(&mut self, text: String, now: DateTime<Utc>) {
        self.text = text;
        self.updated_at = now.max(self.updated_at);
    }
}

impl Record for JournalEntry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Whether `text` has anything worth saving
pub fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Allocate a fresh entry id.
///
/// Ids are creation-time milliseconds, bumped past the largest existing id
/// so entries created within the same millisecond never collide. When the
/// largest id is `u64::MAX` the lowest unused id is taken instead.
pub fn next_entry_id<'a>(
    now: DateTime<Utc>,
    existing: impl IntoIterator<Item = &'a JournalEntry>,
) -> u64 {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let mut ids: Vec<u64> = existing.into_iter().map(|e| e.id).collect();
    ids.sort_unstable();

    match ids.last() {
        Some(&max) if max >= millis => max.checked_add(1).unwrap_or_else(|| lowest_free_id(&ids)),
        _ => millis,
    }
}

fn lowest_free_id(sorted: &[u64]) -> u64 {
    let mut candidate = 0;
    for &id in sorted {
        if id == candidate {
            candidate += 1;
        } else if id > candidate {
            break;
        }
    }
    candidate
}
