//! Persisting entries back to the plain-text outline format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::Entry;

/// Write entries to a file, one question per line, answers indented with a
/// tab below their question.
pub fn write_entries(path: impl AsRef<Path>, entries: &[Entry]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for entry in entries {
        write_entry(&mut file, entry)?;
    }
    file.flush()?;
    Ok(())
}

/// Write a single entry in round-trip form: `question\n`, then `\tanswer\n`
/// when an answer is present.
pub fn write_entry<W: Write>(writer: &mut W, entry: &Entry) -> Result<()> {
    let Some(question) = entry.question.as_deref() else {
        tracing::warn!("skipping entry with no question text");
        return Ok(());
    };
    writeln!(writer, "{question}")?;
    if let Some(answer) = entry.answer.as_deref() {
        writeln!(writer, "\t{answer}")?;
    }
    Ok(())
}
