use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Settings;
use crate::tts::SpeechProvider;

const DEFAULT_TRANSLATE_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects queries past roughly 200 characters, so longer text
/// is synthesized in chunks and the MP3 frames concatenated.
const MAX_CHUNK_CHARS: usize = 200;

pub struct TranslateTtsClient {
    http: Client,
    endpoint: String,
}

impl TranslateTtsClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let endpoint = if settings.tts.endpoint.trim().is_empty() {
            DEFAULT_TRANSLATE_TTS_ENDPOINT.to_string()
        } else {
            settings.tts.endpoint.trim().trim_end_matches('/').to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .context("Failed to build translate TTS HTTP client")?,
            endpoint,
        })
    }

    async fn fetch_chunk(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .send()
            .await
            .context("Translate TTS request failed")?;

        let response = response
            .error_for_status()
            .context("Translate TTS returned an error status")?;

        let bytes = response
            .bytes()
            .await
            .context("Failed to read translate TTS audio")?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechProvider for TranslateTtsClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        // Region suffixes like "en-US" are not understood by the endpoint.
        let language = language.split('-').next().unwrap_or(language);

        let mut audio = Vec::new();
        for chunk in split_chunks(text, MAX_CHUNK_CHARS) {
            audio.extend(self.fetch_chunk(&chunk, language).await?);
        }

        if audio.is_empty() {
            anyhow::bail!("Translate TTS produced no audio");
        }

        Ok(audio)
    }
}

/// Split text into whitespace-boundary chunks of at most `max_chars`
/// characters. A single word longer than the limit becomes its own chunk.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
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
    fn short_text_is_a_single_chunk() {
        assert_eq!(split_chunks("hello world", 200), vec!["hello world"]);
    }

    #[test]
    fn long_text_splits_on_word_boundaries() {
        let text = "alpha beta gamma delta";
        let chunks = split_chunks(text, 11);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn oversized_word_gets_its_own_chunk() {
        let chunks = split_chunks("hi incomprehensibilities yo", 10);
        assert_eq!(chunks, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_chunks("   ", 200).is_empty());
    }
}
