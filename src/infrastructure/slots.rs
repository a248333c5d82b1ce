//! Named persistent key-value slots

use crate::error::{LoungeError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A persistent key-value facility holding one text payload per key
pub trait SlotStorage {
    /// Read a slot. Absent slots are `None`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's payload
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as `<root>/.lounge/<key>.json`
#[derive(Debug, Clone)]
pub struct DirectorySlots {
    dir: PathBuf,
}

impl DirectorySlots {
    /// Slots under the `.lounge` directory of a lounge root
    pub fn new(root: &Path) -> Self {
        DirectorySlots {
            dir: root.join(".lounge"),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for DirectorySlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoungeError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let persistence = |source: io::Error| LoungeError::Persistence {
            slot: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(persistence)?;

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.lounge-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value).map_err(persistence)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path).map_err(persistence)?;
        }

        fs::rename(&tmp_path, &path).map_err(persistence)?;
        Ok(())
    }
}

/// In-memory slots for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: BTreeMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlots {
    pub fn new() -> Self {
        MemorySlots::default()
    }

    /// Seed a slot without counting it as a write
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail as if storage were full
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SlotStorage for MemorySlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LoungeError::Persistence {
                slot: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "storage quota exceeded"),
            });
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
