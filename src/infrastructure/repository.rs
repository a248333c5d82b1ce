//! File system repository

use crate::error::{LoungeError, Result};
use crate::infrastructure::slots::{DirectorySlots, SlotStorage};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for lounge data
pub trait LoungeRepository {
    /// Storage backing the record slots
    type Slots: SlotStorage;

    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .lounge/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .lounge/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .lounge directory exists
    fn is_initialized(&self) -> bool;

    /// Create .lounge directory structure
    fn initialize(&self) -> Result<()>;

    /// Slot storage for journal and mood records
    fn slots(&self) -> Self::Slots;
}

/// File system implementation of LoungeRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover lounge root by walking up from current directory
    /// First checks LOUNGE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LOUNGE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_lounge_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(LoungeError::Config(format!(
                    "LOUNGE_ROOT is set to '{}' but no .lounge directory found. \
                    Run 'lounge init' in that directory or unset LOUNGE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover lounge root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_lounge_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(LoungeError::NotLoungeDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_lounge_dir(path: &Path) -> bool {
        path.join(".lounge").is_dir()
    }
}

impl LoungeRepository for FileSystemRepository {
    type Slots = DirectorySlots;

    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_lounge_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let lounge_dir = self.root.join(".lounge");

        if lounge_dir.exists() {
            return Err(LoungeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&lounge_dir)?;
        Ok(())
    }

    fn slots(&self) -> DirectorySlots {
        DirectorySlots::new(&self.root)
    }
}
