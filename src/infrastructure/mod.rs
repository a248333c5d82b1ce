//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod cue;
pub mod record_store;
pub mod repository;
pub mod slots;
pub mod ticker;

pub use config::Config;
pub use cue::{cue_for, CompletionCue, SilentCue, TerminalBell};
pub use record_store::RecordStore;
pub use repository::{FileSystemRepository, LoungeRepository};
pub use slots::{DirectorySlots, MemorySlots, SlotStorage};
pub use ticker::Ticker;
