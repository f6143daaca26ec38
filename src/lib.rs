//! # thai-deck
//!
//! Anki deck generator for Thai consonants and vowels, with optional
//! text-to-speech audio for every card.
//!
//! ## Features
//!
//! - **Vowel deck**: one card per rendering of every vowel form, with the full
//!   SHORT/LONG cheat-sheet row on the back
//! - **Consonant deck**: one card per consonant with class, initial/final
//!   sound and meaning
//! - **Audio**: idempotent batch synthesis through any [`SynthesisEngine`]
//!   (Google Translate TTS behind the `gtts` feature)
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use thai_deck::{data::VowelFormTable, deck};
//!
//! let table = VowelFormTable::builtin();
//! let cards = deck::vowel::build_cards(&table);
//! deck::write_tsv(&PathBuf::from("thai_vowels.tsv"), &cards)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod config;
pub mod data;
pub mod deck;
pub mod engines;
pub mod error;
pub mod extract;

pub use error::DeckError;
pub use extract::{extract_vowel_symbol, VowelSymbol};

use std::path::Path;

/// Encoding of the bytes returned by a synthesis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
        }
    }
}

/// The result of a synthesis (text-to-speech) operation.
///
/// Holds the encoded audio exactly as the engine produced it.
#[derive(Debug)]
pub struct SynthesisResult {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Encoding of `audio`
    pub format: AudioFormat,
}

impl SynthesisResult {
    /// Write the encoded audio to `path` as-is.
    pub fn write_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, &self.audio)?;
        Ok(())
    }

    /// Size of the encoded audio in bytes.
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}

/// Common interface for text-to-speech synthesis engines.
///
/// Engines are connected once, then asked for one utterance at a time.
/// Each engine may have different parameter types for connecting and for
/// synthesis configuration.
pub trait SynthesisEngine {
    /// Parameters for configuring a synthesis request (language, speed, etc.)
    type SynthesisParams;
    /// Parameters for configuring the connection (endpoint, timeout, etc.)
    type ConnectParams: Default;

    /// Connect using default parameters.
    fn connect(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.connect_with_params(Self::ConnectParams::default())
    }

    /// Connect with custom parameters.
    fn connect_with_params(
        &mut self,
        params: Self::ConnectParams,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Drop the connection and any associated resources.
    fn disconnect(&mut self);

    /// Synthesize speech from the given text.
    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Synthesize speech from the given text and write it to `path`.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_to()`.
    fn synthesize_to_file(
        &mut self,
        text: &str,
        path: &Path,
        params: Option<Self::SynthesisParams>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.synthesize(text, params)?.write_to(path)
    }
}
