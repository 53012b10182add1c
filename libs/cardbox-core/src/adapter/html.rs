//! HTML notes adapter.
//!
//! Body-level elements are questions, except list containers, which answer
//! the element above them. Question and answer text is the innermost
//! markup of the element, attributes cleared.

use std::fs;
use std::path::PathBuf;

use markup5ever_rcdom::Handle;

use crate::dom;
use crate::engine::{extract_entries, EntryRules};
use crate::error::Result;
use crate::types::Extraction;

use super::NoteSource;

/// Tag of the element that carries an answer.
const ANSWER_TAG: &str = "ul";

/// An HTML notes file.
pub struct HtmlNotes {
    path: PathBuf,
}

impl HtmlNotes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NoteSource for HtmlNotes {
    fn extract_entries(&self) -> Result<Extraction> {
        let source = fs::read_to_string(&self.path)?;
        let dom = dom::parse_html(&source);
        let elements = dom::body_children(&dom);
        extract_entries(&elements, &HtmlRules)
    }
}

pub(crate) struct HtmlRules;

impl EntryRules for HtmlRules {
    type Item = Handle;

    fn is_answer(&self, element: &Handle) -> bool {
        dom::element_name(element).as_deref() == Some(ANSWER_TAG)
    }

    fn question_text(&self, element: &Handle) -> Result<String> {
        serialize_cleaned(element)
    }

    fn answer_text(&self, element: &Handle) -> Result<String> {
        serialize_cleaned(element)
    }
}

/// Innermost content of an element, attributes cleared, as markup text.
fn serialize_cleaned(element: &Handle) -> Result<String> {
    let inner = dom::normalize(element)?;
    dom::clear_attributes(&inner);
    dom::serialize_node(&inner)
}

/// Tag-aware variant of the question/answer extraction: additionally strips
/// `#tag` tokens from the element's text and returns them alongside the
/// serialized markup.
pub fn parse_with_tags(element: &Handle) -> Result<(String, Vec<String>)> {
    let (tags, stripped) = dom::extract_node_tags(element)?;
    Ok((dom::serialize_node(&stripped)?, tags))
}
