use std::fmt;

use async_trait::async_trait;
use ns_core::{Error, Result, SpeechSynthesizer};
use reqwest::Client;
use tracing::warn;

use crate::clean_text;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const TTS_URL: &str = "https://translate.google.com/translate_tts";

// The TTS endpoint rejects long inputs, so text is synthesized in chunks.
const MAX_CHUNK_CHARS: usize = 200;

/// Fallback sentence spoken when translation fails.
const TRANSLATION_FALLBACK: &str = "अनुवाद में त्रुटि हुई। कृपया पुनः प्रयास करें।";

/// Hindi speech via the public Google translate endpoints: translate the
/// text, then fetch MP3 audio chunk by chunk.
pub struct GoogleSpeech {
    client: Client,
    language: String,
}

impl GoogleSpeech {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            language: "hi".to_string(),
        }
    }

    /// Translate text into the target language. Falls back to a fixed
    /// sentence instead of failing, so a flaky translation endpoint never
    /// kills the speech call.
    pub async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed, using fallback: {}", e);
                TRANSLATION_FALLBACK.to_string()
            }
        }
    }

    async fn try_translate(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        // Response shape: [[["translated", "original", ...], ...], ...]
        let segments = response
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| Error::Speech("Unexpected translation response".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
            .collect();

        if translated.is_empty() {
            return Err(Error::Speech("Empty translation".to_string()));
        }
        Ok(translated)
    }

    async fn fetch_chunk(&self, chunk: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(TTS_URL)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", chunk),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Speech(format!(
                "TTS endpoint returned {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for GoogleSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GoogleSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSpeech")
            .field("language", &self.language)
            .finish()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    fn language(&self) -> &str {
        &self.language
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Err(Error::Speech("Nothing to synthesize".to_string()));
        }

        let translated = self.translate(&cleaned).await;

        let mut audio = Vec::new();
        for chunk in split_chunks(&translated, MAX_CHUNK_CHARS) {
            audio.extend(self.fetch_chunk(&chunk).await?);
        }
        Ok(audio)
    }
}

/// Split on whitespace into chunks of at most `max_chars` characters; a
/// single oversized word becomes its own chunk rather than being dropped.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            chunks.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_respect_the_limit() {
        let text = "alpha beta gamma delta epsilon";
        let chunks = split_chunks(text, 11);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta", "epsilon"]);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 11);
        }
    }

    #[test]
    fn oversized_word_is_kept() {
        let chunks = split_chunks("supercalifragilistic", 5);
        assert_eq!(chunks, vec!["supercalifragilistic"]);
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(split_chunks("   ", 10).is_empty());
    }
}
