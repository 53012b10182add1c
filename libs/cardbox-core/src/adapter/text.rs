//! Plain-text outline adapter.
//!
//! Questions sit at the left margin; an answer is the line below its
//! question, indented with a tab, two spaces, `"* "`, or a hyphen.

use std::fs;
use std::path::PathBuf;

use crate::engine::{extract_entries, EntryRules};
use crate::error::Result;
use crate::types::Extraction;

use super::NoteSource;

/// Prefixes that mark a line as an answer.
const ANSWER_MARKERS: [&str; 4] = ["\t", "  ", "* ", "-"];

/// Prefixes stripped from answer text. A hyphen marks an answer but is kept
/// in the text.
const ANSWER_PREFIXES: [&str; 3] = ["\t", "  ", "* "];

/// A plain-text notes file.
pub struct TextNotes {
    path: PathBuf,
}

impl TextNotes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NoteSource for TextNotes {
    fn extract_entries(&self) -> Result<Extraction> {
        let source = fs::read_to_string(&self.path)?;
        let lines: Vec<String> = source
            .split_inclusive('\n')
            .filter(|line| *line != "\n")
            .map(str::to_string)
            .collect();
        extract_entries(&lines, &TextRules)
    }
}

pub(crate) struct TextRules;

impl EntryRules for TextRules {
    type Item = String;

    fn is_answer(&self, line: &String) -> bool {
        ANSWER_MARKERS.iter().any(|marker| line.starts_with(marker))
    }

    fn question_text(&self, line: &String) -> Result<String> {
        Ok(line.strip_suffix('\n').unwrap_or(line).to_string())
    }

    fn answer_text(&self, line: &String) -> Result<String> {
        let mut answer = line.as_str();
        for prefix in ANSWER_PREFIXES {
            answer = answer.strip_prefix(prefix).unwrap_or(answer);
        }
        Ok(answer.strip_suffix('\n').unwrap_or(answer).to_string())
    }
}
