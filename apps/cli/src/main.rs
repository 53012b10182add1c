//! Command-line tool that turns a study-notes document into flashcards.
//!
//! Reads a plain-text outline or HTML export, splits it into answered and
//! unanswered entries, writes the unanswered questions back to a file for a
//! later pass, and submits the answered ones to the local flashcard service.

mod anki;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardbox_core::{adapter, writer, NoteSource};

use crate::anki::AnkiClient;

const DEFAULT_SERVICE_URL: &str = "http://localhost:8765";

#[derive(Parser, Debug)]
#[command(
    name = "cardbox",
    version,
    about = "Extract flashcard entries from study notes and submit the answered ones"
)]
struct Cli {
    /// Notes document to read (.txt outline or .html export)
    input: PathBuf,

    /// Deck the answered entries are added to
    #[arg(long, default_value = "Default")]
    deck: String,

    /// File the unanswered questions are written back to
    #[arg(long, default_value = "remaining_questions.txt")]
    remaining: PathBuf,

    /// Flashcard service endpoint; defaults to $ANKI_URL or the local port
    #[arg(long)]
    service_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = adapter::for_path(&cli.input)?;
    let extraction = source
        .extract_entries()
        .with_context(|| format!("failed to extract entries from {}", cli.input.display()))?;
    tracing::info!(
        answered = extraction.answered.len(),
        unanswered = extraction.unanswered.len(),
        "extracted entries"
    );

    writer::write_entries(&cli.remaining, &extraction.unanswered)
        .with_context(|| format!("failed to write {}", cli.remaining.display()))?;

    let service_url = cli
        .service_url
        .or_else(|| std::env::var("ANKI_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    let client = AnkiClient::new(&service_url);
    if !client.is_available() {
        tracing::error!(
            url = %service_url,
            "cannot reach the flashcard service; skipping submission. Have you tried starting it?"
        );
        return Ok(());
    }

    for entry in &extraction.answered {
        let Some(question) = entry.question.as_deref() else {
            tracing::warn!("skipping answered entry with no question");
            continue;
        };
        let answer = entry.answer.as_deref().unwrap_or_default();
        client.add_note(question, answer, &cli.deck, &entry.tags)?;
    }

    Ok(())
}
