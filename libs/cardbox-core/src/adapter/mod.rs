//! Format adapters translating a notes document into extraction input.

pub mod html;
pub mod text;

pub use html::HtmlNotes;
pub use text::TextNotes;

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::types::Extraction;

/// A notes document that can be split into flashcard entries.
pub trait NoteSource {
    fn extract_entries(&self) -> Result<Extraction>;
}

/// Select the adapter for a notes file by extension.
///
/// Fails before any I/O when the extension is neither `txt` nor `html`.
pub fn for_path(path: &Path) -> Result<Box<dyn NoteSource>> {
    match path.extension().and_then(OsStr::to_str) {
        Some("html") => Ok(Box::new(HtmlNotes::new(path))),
        Some("txt") => Ok(Box::new(TextNotes::new(path))),
        other => Err(ExtractError::UnsupportedFormat {
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}
