//! Journal use cases

use crate::domain::journal::{has_content, next_entry_id};
use crate::domain::JournalEntry;
use crate::error::{LoungeError, Result};
use crate::infrastructure::{RecordStore, SlotStorage};
use chrono::Utc;
use log::info;

/// Slot holding journal entries
pub const JOURNAL_SLOT: &str = "journal";

/// Service for creating, editing and deleting journal entries
pub struct JournalService<S: SlotStorage> {
    store: RecordStore<JournalEntry, S>,
}

impl<S: SlotStorage> JournalService<S> {
    /// Open the journal slot in `storage`
    pub fn new(storage: S) -> Self {
        JournalService {
            store: RecordStore::open(storage, JOURNAL_SLOT),
        }
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[JournalEntry] {
        self.store.records()
    }

    pub fn get(&self, id: u64) -> Option<&JournalEntry> {
        self.store.find(id)
    }

    /// Save a new entry at the top of the journal
    pub fn create(&mut self, text: &str) -> Result<JournalEntry> {
        if !has_content(text) {
            return Err(LoungeError::EmptyContent);
        }

        let now = Utc::now();
        let id = next_entry_id(now, self.store.records());
        let entry = self
            .store
            .prepend(JournalEntry::new(id, text.to_string(), now))?
            .clone();

        info!("Created journal entry {}", entry.id);
        Ok(entry)
    }

    /// Replace the text of an existing entry, keeping its place and creation time
    pub fn update(&mut self, id: u64, text: &str) -> Result<JournalEntry> {
        if !has_content(text) {
            return Err(LoungeError::EmptyContent);
        }

        let now = Utc::now();
        let updated = self
            .store
            .update(id, |entry| entry.revise(text.to_string(), now))?
            .cloned()
            .ok_or(LoungeError::RecordNotFound(id))?;

        info!("Updated journal entry {}", id);
        Ok(updated)
    }

    /// Delete an entry. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            info!("Removed journal entry {}", id);
        }
        Ok(removed)
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }
}

/// Draft text plus the entry being edited, if any.
///
/// Deleting the entry under edit always clears the edit state.
pub struct JournalComposer<S: SlotStorage> {
    service: JournalService<S>,
    draft: String,
    editing: Option<u64>,
}

impl<S: SlotStorage> JournalComposer<S> {
    pub fn new(service: JournalService<S>) -> Self {
        JournalComposer {
            service,
            draft: String::new(),
            editing: None,
        }
    }

    pub fn service(&self) -> &JournalService<S> {
        &self.service
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Id of the entry being edited
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        has_content(&self.draft)
    }

    /// Load an existing entry into the draft for editing
    pub fn begin_edit(&mut self, id: u64) -> Result<()> {
        let entry = self
            .service
            .get(id)
            .ok_or(LoungeError::RecordNotFound(id))?;
        self.draft = entry.text.clone();
        self.editing = Some(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.editing = None;
    }

    /// Create or update depending on the edit state, then clear the draft.
    /// A blank draft saves nothing and returns `None`.
    pub fn save(&mut self) -> Result<Option<JournalEntry>> {
        if !self.can_save() {
            return Ok(None);
        }

        let saved = match self.editing {
            Some(id) => self.service.update(id, &self.draft)?,
            None => self.service.create(&self.draft)?,
        };

        self.cancel_edit();
        Ok(Some(saved))
    }

    /// Delete an entry, dropping the edit state if it was the one being edited
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let removed = self.service.remove(id)?;
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        Ok(removed)
    }
}
