//! Card builders and the Anki TSV writer.
//!
//! Anki's plain-text importer takes one note per line, fields separated by
//! tabs. Back sides are HTML; a field is only quoted when it contains a tab,
//! a quote or a newline (the vowel tables span several lines).

pub mod consonant;
pub mod vowel;

use std::path::Path;

use serde::Serialize;

use crate::DeckError;

/// One note: the card face and its HTML back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Anki sound tag for a media file name.
pub fn sound_tag(file_name: &str) -> String {
    format!("[sound:{file_name}]")
}

/// Write `cards` to `path` as a headerless, tab-separated file.
pub fn write_tsv(path: &Path, cards: &[Card]) -> Result<(), DeckError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;

    for card in cards {
        writer.serialize(card)?;
    }
    writer.flush()?;

    log::info!("Wrote {} cards to {}", cards.len(), path.display());
    Ok(())
}
