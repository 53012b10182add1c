//! Core library for turning study-notes documents into flashcard entries.
//!
//! Provides:
//! - Generic extraction engine splitting notes into answered and unanswered
//!   question/answer entries
//! - Format adapters for plain-text outlines and HTML exports
//! - Tag extraction for `#tag` tokens embedded in note text
//! - Writer persisting unanswered questions for a later pass

pub mod adapter;
pub mod dom;
pub mod engine;
pub mod error;
pub mod tags;
pub mod types;
pub mod writer;

pub use adapter::{for_path, HtmlNotes, NoteSource, TextNotes};
pub use engine::{extract_entries, EntryRules};
pub use error::{ExtractError, Result};
pub use tags::extract_tags;
pub use types::{Entry, Extraction};
pub use writer::write_entries;
