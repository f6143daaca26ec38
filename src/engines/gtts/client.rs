use reqwest::blocking::Client;

/// Public Translate TTS endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

#[derive(thiserror::Error, Debug)]
pub enum GttsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TTS service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("TTS service returned no audio for chunk {idx}")]
    EmptyAudio { idx: usize },
    #[error("Nothing to speak: text is empty")]
    EmptyText,
    #[error("Engine not connected. Call connect() first.")]
    NotConnected,
}

/// One Translate TTS request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRequest<'a> {
    pub text: &'a str,
    pub lang: &'a str,
    pub slow: bool,
    pub idx: usize,
    pub total: usize,
}

impl ChunkRequest<'_> {
    /// Query parameters, in the order the web client sends them.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ie", "UTF-8".to_string()),
            ("q", self.text.to_string()),
            ("tl", self.lang.to_string()),
            ("total", self.total.to_string()),
            ("idx", self.idx.to_string()),
            ("textlen", self.text.chars().count().to_string()),
            ("client", "tw-ob".to_string()),
            ("ttsspeed", if self.slow { "0.3" } else { "1" }.to_string()),
        ]
    }
}

/// Fetch the MP3 bytes for one chunk.
pub fn fetch_chunk(
    client: &Client,
    endpoint: &str,
    request: &ChunkRequest<'_>,
) -> Result<Vec<u8>, GttsError> {
    log::debug!(
        "Requesting chunk {}/{} ({} chars, lang={})",
        request.idx + 1,
        request.total,
        request.text.chars().count(),
        request.lang
    );

    let response = client.get(endpoint).query(&request.query()).send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(GttsError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes()?;
    if bytes.is_empty() {
        return Err(GttsError::EmptyAudio { idx: request.idx });
    }
    Ok(bytes.to_vec())
}
