//! Google Translate text-to-speech engine.
//!
//! Speaks text through the public Translate TTS endpoint, the same service
//! the gTTS tool uses. Each request carries at most 100 characters, so longer
//! texts are split into chunks and the returned MP3 segments are concatenated.
//!
//! The service is rate limited and undocumented; callers running a batch
//! should pause between requests (see [`crate::audio::AudioOptions`]).
//!
//! # Examples
//!
//! ```rust,no_run
//! use thai_deck::{SynthesisEngine, engines::gtts::{GttsEngine, GttsInferenceParams}};
//! use std::path::PathBuf;
//!
//! let mut engine = GttsEngine::new();
//! engine.connect()?;
//!
//! let params = GttsInferenceParams {
//!     lang: "th".to_string(),
//!     slow: true,
//! };
//! engine.synthesize_to_file("กอ ไก่", &PathBuf::from("ko_kai.mp3"), Some(params))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod engine;
pub mod tokenizer;

pub use client::GttsError;
pub use engine::{GttsClientParams, GttsEngine, GttsInferenceParams};
