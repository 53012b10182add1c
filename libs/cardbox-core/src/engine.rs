//! Generic entry extraction engine.
//!
//! Scans an ordered sequence of line-like items in a single pass and groups
//! them into question/answer entries. The items themselves are opaque; a
//! format adapter supplies the classification and text extraction through
//! [`EntryRules`].

use crate::error::Result;
use crate::types::{Entry, Extraction};

/// Format-specific rules parameterizing [`extract_entries`].
pub trait EntryRules {
    /// One line-like item of the source document.
    type Item;

    /// Whether the item is an answer to the question preceding it.
    fn is_answer(&self, item: &Self::Item) -> bool;

    /// Question text of a non-answer item.
    fn question_text(&self, item: &Self::Item) -> Result<String>;

    /// Answer text of an answer item.
    fn answer_text(&self, item: &Self::Item) -> Result<String>;
}

/// Split a sequence of items into answered and unanswered entries.
///
/// A question becomes answered when the next item is an answer; a question
/// followed by another question is emitted unanswered. The final item, when
/// it is not an answer, is flushed as an unanswered question immediately.
/// An answer with no pending question still produces an entry, with
/// `question: None` and a warning.
pub fn extract_entries<R: EntryRules>(items: &[R::Item], rules: &R) -> Result<Extraction> {
    let mut extraction = Extraction::default();
    let mut current_question: Option<String> = None;

    for (index, item) in items.iter().enumerate() {
        let is_last = index + 1 == items.len();
        if rules.is_answer(item) {
            if current_question.is_none() {
                tracing::warn!(position = index, "answer item has no preceding question");
            }
            extraction.answered.push(Entry {
                question: current_question.take(),
                answer: Some(rules.answer_text(item)?),
                tags: Vec::new(),
            });
        } else if !is_last {
            if let Some(question) = current_question.take() {
                extraction.unanswered.push(Entry {
                    question: Some(question),
                    answer: None,
                    tags: Vec::new(),
                });
            }
            current_question = Some(rules.question_text(item)?);
        } else {
            extraction.unanswered.push(Entry {
                question: Some(rules.question_text(item)?),
                answer: None,
                tags: Vec::new(),
            });
        }
    }

    Ok(extraction)
}
