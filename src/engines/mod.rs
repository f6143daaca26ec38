//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `gtts` - Google Translate TTS (HTTP, network access required)

#[cfg(feature = "gtts")]
pub mod gtts;
