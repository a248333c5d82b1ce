//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod mood;
pub mod timer;

pub use journal::{JournalComposer, JournalService};
pub use manage_config::ConfigService;
pub use mood::MoodService;
pub use timer::{TimerControl, TimerSession};
