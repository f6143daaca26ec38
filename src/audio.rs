//! Audio generation for both decks.
//!
//! Every card's sound tag points at `cheat_sheet_<category>_<key>.mp3`. The
//! batch runner fills a sounds directory with those files through any
//! [`SynthesisEngine`], leaving files that already exist untouched, so a
//! re-run only fetches what is missing.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use derive_builder::Builder;

use crate::data::{spoken_text, Consonant, VowelSymbolIndex};
use crate::{DeckError, SynthesisEngine};

/// Which deck an audio file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCategory {
    Consonant,
    Vowel,
}

impl AudioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCategory::Consonant => "consonant",
            AudioCategory::Vowel => "vowel",
        }
    }
}

impl fmt::Display for AudioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media file name for a card key.
pub fn audio_file_name(category: AudioCategory, key: &str) -> String {
    format!("cheat_sheet_{}_{}.mp3", category.as_str(), key)
}

/// One file to produce: what to say and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioJob {
    /// Glyph or vowel symbol, used in log lines.
    pub key: String,
    pub text: String,
    pub file_name: String,
}

/// Consonant jobs speak the letter name, e.g. `กอ ไก่`.
pub fn consonant_audio_jobs(consonants: &[Consonant]) -> Vec<AudioJob> {
    consonants
        .iter()
        .map(|c| AudioJob {
            key: c.glyph.to_string(),
            text: c.name.to_string(),
            file_name: audio_file_name(AudioCategory::Consonant, c.glyph),
        })
        .collect()
}

/// One job per vowel symbol, speaking its first rendering.
pub fn vowel_audio_jobs(index: &VowelSymbolIndex) -> Vec<AudioJob> {
    index
        .entries()
        .iter()
        .map(|entry| {
            let key = entry.symbol.to_string();
            AudioJob {
                file_name: audio_file_name(AudioCategory::Vowel, &key),
                text: spoken_text(&entry.rendering),
                key,
            }
        })
        .collect()
}

/// A few consonants written as `<glyph>_test.mp3`, to check the engine works
/// before running a full batch.
pub fn sample_audio_jobs(consonants: &[Consonant]) -> Vec<AudioJob> {
    const SAMPLE: [&str; 3] = ["ก", "ข", "ด"];
    SAMPLE
        .iter()
        .filter_map(|glyph| consonants.iter().find(|c| c.glyph == *glyph))
        .map(|c| AudioJob {
            key: c.glyph.to_string(),
            text: c.name.to_string(),
            file_name: format!("{}_test.mp3", c.glyph),
        })
        .collect()
}

/// Where to write audio and how fast to ask for it.
#[derive(Debug, Clone, Builder)]
#[builder(default, setter(into))]
pub struct AudioOptions {
    /// Directory the files land in; created if missing.
    pub sounds_dir: PathBuf,
    /// Pause after each synthesis call.
    pub request_delay: Duration,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from("sounds"),
            request_delay: Duration::from_millis(500),
        }
    }
}

/// Outcome of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioReport {
    pub generated: usize,
    pub skipped: usize,
    pub failed: Vec<String>,
}

impl AudioReport {
    pub fn total(&self) -> usize {
        self.generated + self.skipped + self.failed.len()
    }
}

/// Synthesize every job whose file does not exist yet.
///
/// Only a missing sounds directory that cannot be created is fatal. A failed
/// item is logged, recorded in the report, and the batch moves on.
pub fn generate_audio<E>(
    engine: &mut E,
    jobs: &[AudioJob],
    params: Option<E::SynthesisParams>,
    options: &AudioOptions,
) -> Result<AudioReport, DeckError>
where
    E: SynthesisEngine,
    E::SynthesisParams: Clone,
{
    if !options.sounds_dir.exists() {
        std::fs::create_dir_all(&options.sounds_dir)?;
        log::info!("Created sounds directory {}", options.sounds_dir.display());
    }

    let mut report = AudioReport::default();

    for job in jobs {
        let path = options.sounds_dir.join(&job.file_name);
        if path.exists() {
            log::debug!("{} - {} already exists", job.key, path.display());
            report.skipped += 1;
            continue;
        }

        match engine.synthesize_to_file(&job.text, &path, params.clone()) {
            Ok(()) => {
                log::info!("{} - generated {}", job.key, path.display());
                report.generated += 1;
            }
            Err(e) => {
                log::warn!("{} - failed to generate audio: {e}", job.key);
                report.failed.push(job.key.clone());
            }
        }

        if !options.request_delay.is_zero() {
            std::thread::sleep(options.request_delay);
        }
    }

    log::info!(
        "Audio batch done: {} generated, {} skipped, {} failed",
        report.generated,
        report.skipped,
        report.failed.len()
    );
    Ok(report)
}
