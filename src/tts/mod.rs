//! Text-to-speech providers
//!
//! Synthesis is delegated entirely to a hosted provider; this module only
//! carries the provider trait and the translate-TTS client.

mod translate;

pub use translate::TranslateTtsClient;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize `text` in `language`, returning encoded MP3 bytes.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;
}

/// Build a speech provider from runtime settings.
pub fn build_speech_provider(settings: &Settings) -> Result<Box<dyn SpeechProvider>> {
    match settings.tts.provider.to_lowercase().as_str() {
        "google-translate" => Ok(Box::new(TranslateTtsClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported tts.provider '{}'. Supported providers: google-translate",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.tts.provider = "robovoice".to_string();

        let err = match build_speech_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported tts.provider"));
    }
}
