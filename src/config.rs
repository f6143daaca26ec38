use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::audio::{AudioOptions, AudioOptionsBuilder};
use crate::DeckError;

/// Run configuration.
///
/// Read from a JSON file when one is given; any field left out takes its
/// default. Command-line flags are applied on top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Directory the TSV files are written to.
    pub output_dir: PathBuf,
    pub sounds_dir: PathBuf,
    /// Run the audio step after writing the deck.
    pub generate_audio: bool,
    /// Pause between synthesis requests, in milliseconds.
    pub request_delay_ms: u64,
    pub language: String,
    pub slow: bool,
    /// Vowel table to use instead of the built-in one.
    pub vowel_table: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            sounds_dir: PathBuf::from("sounds"),
            generate_audio: false,
            request_delay_ms: 500,
            language: "th".to_string(),
            slow: false,
            vowel_table: None,
        }
    }
}

impl DeckConfig {
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DeckError::Config(format!("Failed to read {}: {e}", path.display())))?;
        let config = Self::from_json_str(&content)?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DeckError> {
        serde_json::from_str(content)
            .map_err(|e| DeckError::Config(format!("Failed to parse JSON: {e}")))
    }

    pub fn audio_options(&self) -> AudioOptions {
        AudioOptionsBuilder::default()
            .sounds_dir(self.sounds_dir.clone())
            .request_delay(Duration::from_millis(self.request_delay_ms))
            .build()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(DeckConfig::from_json_str("{}").unwrap(), DeckConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = DeckConfig::from_json_str(
            r#"{"generate_audio": true, "request_delay_ms": 0, "vowel_table": "v.json"}"#,
        )
        .unwrap();
        assert!(config.generate_audio);
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.vowel_table, Some(PathBuf::from("v.json")));
        assert_eq!(config.language, "th");
        assert_eq!(config.sounds_dir, PathBuf::from("sounds"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = DeckConfig::from_json_str(r#"{"audio": true}"#).unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
    }

    #[test]
    fn audio_options_follow_config() {
        let config = DeckConfig {
            sounds_dir: PathBuf::from("media"),
            request_delay_ms: 250,
            ..Default::default()
        };
        let options = config.audio_options();
        assert_eq!(options.sounds_dir, PathBuf::from("media"));
        assert_eq!(options.request_delay, Duration::from_millis(250));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DeckConfig::load(&dir.path().join("nope.json")).is_err());
    }
}
