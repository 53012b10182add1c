//! Core types for flashcard entry extraction.

use serde::{Deserialize, Serialize};

/// A question paired with an optional answer and the tags found alongside it.
///
/// `question` is optional because an answer item with no preceding question
/// still produces an entry (the engine logs a warning when that happens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Entry {
    /// Entry for a question with a resolved answer.
    pub fn answered(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            tags: Vec::new(),
        }
    }

    /// Entry for a question that has no answer yet.
    pub fn unanswered(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: None,
            tags: Vec::new(),
        }
    }
}

/// Result of one extraction pass over a notes document.
///
/// Both lists preserve the source order of their questions and never share
/// an input item.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub answered: Vec<Entry>,
    pub unanswered: Vec<Entry>,
}
