use std::time::Duration;

use reqwest::blocking::Client;

use crate::{AudioFormat, SynthesisEngine, SynthesisResult};

use super::client::{fetch_chunk, ChunkRequest, GttsError, DEFAULT_ENDPOINT};
use super::tokenizer::{split_text, MAX_CHUNK_CHARS};

/// Parameters for configuring the HTTP connection.
#[derive(Debug, Clone)]
pub struct GttsClientParams {
    /// Translate TTS endpoint. Override to point at a mirror or a test server.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GttsClientParams {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("thai-deck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Parameters for configuring a synthesis request.
#[derive(Debug, Clone)]
pub struct GttsInferenceParams {
    /// Translate language code (e.g. `"th"`, `"en"`).
    pub lang: String,
    /// Slower, more deliberate speech.
    pub slow: bool,
}

impl Default for GttsInferenceParams {
    fn default() -> Self {
        Self {
            lang: "th".to_string(),
            slow: false,
        }
    }
}

/// Google Translate TTS engine.
///
/// # Quick Start
///
/// ```rust,no_run
/// use thai_deck::{SynthesisEngine, engines::gtts::GttsEngine};
///
/// let mut engine = GttsEngine::new();
/// engine.connect()?;
/// let result = engine.synthesize("สวัสดี", None)?;
/// println!("{} bytes of MP3", result.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GttsEngine {
    client: Option<Client>,
    endpoint: String,
}

impl Default for GttsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GttsEngine {
    pub fn new() -> Self {
        Self {
            client: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Fetch and concatenate every chunk of `text`.
    fn speak(&self, text: &str, params: &GttsInferenceParams) -> Result<Vec<u8>, GttsError> {
        let client = self.client.as_ref().ok_or(GttsError::NotConnected)?;

        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(GttsError::EmptyText);
        }
        if chunks.len() > 1 {
            log::debug!("Text split into {} chunks", chunks.len());
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let request = ChunkRequest {
                text: chunk,
                lang: &params.lang,
                slow: params.slow,
                idx,
                total: chunks.len(),
            };
            audio.extend(fetch_chunk(client, &self.endpoint, &request)?);
        }
        Ok(audio)
    }
}

impl SynthesisEngine for GttsEngine {
    type SynthesisParams = GttsInferenceParams;
    type ConnectParams = GttsClientParams;

    fn connect_with_params(
        &mut self,
        params: Self::ConnectParams,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent)
            .build()
            .map_err(GttsError::Http)?;
        log::info!("Translate TTS client ready ({})", params.endpoint);
        self.client = Some(client);
        self.endpoint = params.endpoint;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.client = None;
    }

    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let p = params.unwrap_or_default();
        let audio = self.speak(text, &p)?;

        Ok(SynthesisResult {
            audio,
            format: AudioFormat::Mp3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesize_requires_connection() {
        let mut engine = GttsEngine::new();
        let err = engine.synthesize("กา", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GttsError>(),
            Some(GttsError::NotConnected)
        ));
    }

    #[test]
    fn blank_text_is_rejected_before_any_request() {
        let mut engine = GttsEngine::new();
        engine.connect().unwrap();
        let err = engine.synthesize("   ", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GttsError>(),
            Some(GttsError::EmptyText)
        ));
    }

    #[test]
    fn disconnect_drops_client() {
        let mut engine = GttsEngine::new();
        engine.connect().unwrap();
        assert!(engine.is_connected());
        engine.disconnect();
        assert!(!engine.is_connected());
    }

    #[test]
    fn defaults_to_thai() {
        assert_eq!(GttsInferenceParams::default().lang, "th");
    }
}
