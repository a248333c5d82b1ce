//! lounge - Terminal relaxation companion
//!
//! A small command-line app with a journal, a mood tracker and a relaxation
//! countdown timer. Journal and mood records are kept in JSON slots under a
//! `.lounge` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LoungeError;
