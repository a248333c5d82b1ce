//! Error types for lounge

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lounge application
#[derive(Debug, Error)]
pub enum LoungeError {
    #[error("Not a lounge directory: {0}")]
    NotLoungeDirectory(PathBuf),

    #[error("Entry text is empty")]
    EmptyContent,

    #[error("Journal entry not found: {0}")]
    RecordNotFound(u64),

    #[error("Unknown mood: {0}")]
    InvalidMood(String),

    #[error("Duration of {minutes} minutes is out of range ({min}-{max})")]
    DurationOutOfRange { minutes: u32, min: u32, max: u32 },

    #[error("Failed to persist '{slot}' slot: {source}")]
    Persistence {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LoungeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LoungeError::NotLoungeDirectory(_) => 2,
            LoungeError::EmptyContent => 3,
            LoungeError::RecordNotFound(_) => 4,
            LoungeError::InvalidMood(_) | LoungeError::DurationOutOfRange { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LoungeError::NotLoungeDirectory(path) => {
                format!(
                    "Not a lounge directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'lounge init' in this directory to create a new lounge\n\
                    • Navigate to an existing lounge directory\n\
                    • Set LOUNGE_ROOT environment variable to your lounge path",
                    path.display()
                )
            }
            LoungeError::EmptyContent => "Nothing to save: the entry text is empty.\n\n\
                Suggestions:\n\
                • Write something first, even a single word\n\
                • Use 'lounge journal prompt' if you need inspiration"
                .to_string(),
            LoungeError::RecordNotFound(id) => {
                format!(
                    "Journal entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'lounge journal list' to see entry ids",
                    id
                )
            }
            LoungeError::InvalidMood(mood) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods: amazing, happy, calm, tired, stressed, anxious\n\
                    Example: lounge mood log calm --note \"sunny afternoon\"",
                    mood
                )
            }
            LoungeError::DurationOutOfRange { min, max, .. } => {
                format!(
                    "{}\n\n\
                    Pick a custom time between {} and {} minutes, or use a preset:\n\
                    lounge timer presets",
                    self, min, max
                )
            }
            LoungeError::Persistence { slot, source } => {
                format!(
                    "Could not save your {} data: {}\n\n\
                    Your last change was NOT stored. Check free disk space and \
                    permissions of the .lounge directory.",
                    slot, source
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LoungeError
pub type Result<T> = std::result::Result<T, LoungeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_lounge_directory_suggestion() {
        let err = LoungeError::NotLoungeDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("lounge init"));
        assert!(msg.contains("LOUNGE_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_mood_lists_valid_moods() {
        let err = LoungeError::InvalidMood("grumpy".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'grumpy'"));
        assert!(msg.contains("amazing, happy, calm, tired, stressed, anxious"));
    }

    #[test]
    fn test_duration_out_of_range_message() {
        let err = LoungeError::DurationOutOfRange {
            minutes: 500,
            min: 1,
            max: 120,
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("500 minutes"));
        assert!(msg.contains("between 1 and 120"));
        assert!(msg.contains("lounge timer presets"));
    }

    #[test]
    fn test_persistence_failure_is_loud() {
        let err = LoungeError::Persistence {
            slot: "journal".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("journal"));
        assert!(msg.contains("disk full"));
        assert!(msg.contains("NOT stored"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LoungeError::NotLoungeDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(LoungeError::EmptyContent.exit_code(), 3);
        assert_eq!(LoungeError::RecordNotFound(7).exit_code(), 4);
        assert_eq!(LoungeError::InvalidMood("x".into()).exit_code(), 5);
        assert_eq!(LoungeError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = LoungeError::Config("bad value".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad value");
    }
}
